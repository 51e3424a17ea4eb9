//! Error handling and exit codes.

use fibseq_core::constants::exit_codes;
use fibseq_core::FibError;

/// Exit code for a sequence error.
pub fn handle_error(err: &FibError) -> i32 {
    match err {
        FibError::InvalidArgument(_) => exit_codes::ERROR_INVALID_ARGUMENT,
        FibError::ArithmeticOverflow(_, _) => exit_codes::ERROR_OVERFLOW,
    }
}

/// Exit code for any application error, looking through its cause chain.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<FibError>())
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        assert_eq!(handle_error(&FibError::InvalidArgument("n".into())), 4);
        assert_eq!(handle_error(&FibError::ArithmeticOverflow(94, "u64")), 2);
    }

    #[test]
    fn exit_code_through_context() {
        let err = anyhow::Error::new(FibError::InvalidArgument("bad".into())).context("generating");
        assert_eq!(exit_code(&err), exit_codes::ERROR_INVALID_ARGUMENT);
    }

    #[test]
    fn exit_code_generic() {
        let err = anyhow::anyhow!("disk full");
        assert_eq!(exit_code(&err), exit_codes::ERROR_GENERIC);
    }
}
