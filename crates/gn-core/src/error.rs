use thiserror::Error;

pub type GnResult<T> = Result<T, GnError>;

/// Lowest common error of the workspace; crate errors convert into it.
#[derive(Error, Debug)]
pub enum GnError {
    #[error("{what} is not finite ({value})")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_quantity() {
        let err = GnError::NonFinite {
            what: "pressure",
            value: f64::INFINITY,
        };
        assert_eq!(err.to_string(), "pressure is not finite (inf)");
    }
}
