#[cfg(test)]
use std::cell::RefCell;
#[cfg(not(test))]
use std::env;

/// Retrieve the value passed to the app as `{arg_name}=value`.
/// The first matching arg wins.
///
/// As this reads the process args, a function relying on it
/// should be tested by wrapping it with `with_env_args(args, fn)`.
pub fn retrieve_arg_value(arg_name: &str) -> Option<String> {
    let arg_prefix = format!("{arg_name}=");
    get_env_args()
        .into_iter()
        .find(|arg| arg.starts_with(&arg_prefix))
        .and_then(|arg| arg.split_once('=').map(|(_, value)| value.to_owned()))
}

/// Same as [`retrieve_arg_value`], but empty values count as missing.
pub fn retrieve_non_empty_arg_value(arg_name: &str) -> Option<String> {
    retrieve_arg_value(arg_name).filter(|value| !value.trim().is_empty())
}

#[cfg(not(test))]
fn get_env_args() -> Vec<String> {
    env::args().collect()
}

#[cfg(test)]
thread_local! {
    /// Args seen by the app while running a test wrapped with `with_env_args`.
    static ENV_ARGS: RefCell<Vec<String>> = const { RefCell::new(vec![]) };
}

#[cfg(test)]
fn get_env_args() -> Vec<String> {
    ENV_ARGS.with(|vec| vec.borrow().clone())
}

/// Run `function` as if the app had been given `args`.
/// Previous args are restored afterward.
#[cfg(test)]
pub fn with_env_args<F, T>(args: Vec<String>, function: F) -> T
where
    F: FnOnce() -> T,
{
    ENV_ARGS.with(|refcell| {
        let old_value = refcell.replace(args);
        let result = function();
        refcell.replace(old_value);
        result
    })
}

#[cfg(test)]
pub mod tests {
    use crate::tools::env_args::{retrieve_arg_value, retrieve_non_empty_arg_value, with_env_args};
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        args = {
            vec!["--port=8080".to_owned()],
            vec!["--backend-url=http://localhost/api?key=value".to_owned()],
            vec!["--port=".to_owned()],
            vec!["--portal=8080".to_owned()],
            vec![],
        },
        arg_name = {"--port", "--backend-url", "--port", "--port", "--port"},
        expected_result = {
            Some("8080".to_owned()),
            Some("http://localhost/api?key=value".to_owned()),
            Some("".to_owned()),
            None,
            None,
        }
    )]
    fn should_retrieve_arg_value(args: Vec<String>, arg_name: &str, expected_result: Option<String>) {
        let result = with_env_args(args, || retrieve_arg_value(arg_name));
        assert_eq!(expected_result, result);
    }

    #[test]
    fn should_retrieve_first_matching_arg_value() {
        let args = vec!["--port=1".to_owned(), "--port=2".to_owned()];

        let result = with_env_args(args, || retrieve_arg_value("--port"));

        assert_eq!(Some("1".to_owned()), result);
    }

    #[parameterized(
        args = {vec!["--port=".to_owned()], vec!["--port=  ".to_owned()], vec!["--port=8080".to_owned()]},
        expected_result = {None, None, Some("8080".to_owned())}
    )]
    fn should_retrieve_non_empty_arg_value(args: Vec<String>, expected_result: Option<String>) {
        let result = with_env_args(args, || retrieve_non_empty_arg_value("--port"));
        assert_eq!(expected_result, result);
    }

    #[test]
    fn should_restore_args_after_run() {
        with_env_args(vec!["--port=1".to_owned()], || ());

        assert_eq!(None, retrieve_arg_value("--port"));
    }
}
