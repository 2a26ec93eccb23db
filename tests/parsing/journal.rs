#[cfg(test)]
mod diagnostics {
    use yamlet::diagnostics::{self, NO_ERROR};
    use yamlet::parsing::{self, ErrorKind};

    // This is the only test in this binary that reads the process-wide log;
    // other tests may still be writing to it concurrently, so look through
    // everything retained rather than assuming the newest entry is ours.
    #[test]
    fn failures_reach_process_log() {
        let result = parsing::parse("key: \"unterminated");
        let error = result.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Lexical);

        let mut found = false;
        loop {
            let message = diagnostics::pop_last_error();
            if message == NO_ERROR {
                break;
            }
            if message.contains("Unterminated string") {
                found = true;
            }
        }
        assert!(found, "no message mentioning the unterminated string");
    }
}
