use std::path::PathBuf;

use clap::{builder::NonEmptyStringValueParser, Parser};

use crate::DEFAULT_VERSION;

/// Set the Julia kernel metadata of a notebook.
#[derive(Parser, Debug)]
#[command(
    about,
    long_about = None,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct Args {
    /// path to the notebook to be modified
    #[arg(long = "notebook_path")]
    pub notebook_path: PathBuf,

    /// kernel display name and identifier, e.g. "Julia 1.10.0"
    #[arg(long = "kernel_name", value_parser = NonEmptyStringValueParser::new())]
    pub kernel_name: String,

    /// version recorded in the notebook's language info
    #[arg(long, default_value = DEFAULT_VERSION)]
    pub version: String,
}

#[cfg(test)]
mod tests {
    use clap::{error::ErrorKind, CommandFactory};

    use super::*;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_args_version_defaults_to_latest() {
        // Act
        let args = Args::try_parse_from([
            "notebook-kernel-patch",
            "--notebook_path",
            "nb.ipynb",
            "--kernel_name",
            "Julia 1.10.0",
        ])
        .unwrap();

        // Assert
        assert_eq!(args.notebook_path, PathBuf::from("nb.ipynb"));
        assert_eq!(args.kernel_name, "Julia 1.10.0");
        assert_eq!(args.version, "latest");
    }

    #[test]
    fn test_args_version_is_a_value() {
        let args = Args::try_parse_from([
            "notebook-kernel-patch",
            "--notebook_path",
            "nb.ipynb",
            "--kernel_name",
            "Julia 1.10.0",
            "--version",
            "1.10.0",
        ])
        .unwrap();

        assert_eq!(args.version, "1.10.0");
    }

    #[test]
    fn test_args_repeated_flag_last_wins() {
        let args = Args::try_parse_from([
            "notebook-kernel-patch",
            "--notebook_path",
            "old.ipynb",
            "--kernel_name",
            "Julia 1.9.3",
            "--version",
            "1.9.3",
            "--notebook_path",
            "nb.ipynb",
            "--kernel_name",
            "Julia 1.10.0",
            "--version",
            "1.10.0",
        ])
        .unwrap();

        assert_eq!(args.notebook_path, PathBuf::from("nb.ipynb"));
        assert_eq!(args.kernel_name, "Julia 1.10.0");
        assert_eq!(args.version, "1.10.0");
    }

    #[test]
    fn test_args_unhappy() {
        // Arrange
        let cases: Vec<(Vec<&str>, ErrorKind)> = vec![
            (
                vec!["--kernel_name", "Julia 1.10.0"],
                ErrorKind::MissingRequiredArgument,
            ),
            (
                vec!["--notebook_path", "nb.ipynb"],
                ErrorKind::MissingRequiredArgument,
            ),
            (
                vec!["--notebook_path", "nb.ipynb", "--kernel_name", ""],
                ErrorKind::InvalidValue,
            ),
            (
                vec!["--notebook-path", "nb.ipynb", "--kernel_name", "julia"],
                ErrorKind::UnknownArgument,
            ),
        ];

        // Act/Assert
        for (argv, expected) in cases {
            let err = Args::try_parse_from(std::iter::once("notebook-kernel-patch").chain(argv))
                .unwrap_err();
            assert_eq!(expected, err.kind());
        }
    }
}
