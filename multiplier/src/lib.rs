//! Signed 64-bit multiplication, exported for dynamic loading, plus the
//! operand handling shared by the `multiply-prompt` and `multiply-args`
//! drivers.

mod error;
mod input;
mod report;

pub use error::Error;
pub use input::{parse_operand, Tokens};
pub use report::Report;

/// Message printed by the argument driver when it is not given exactly two
/// operands.
pub const USAGE: &str = "Please enter 2 numbers to multiply";

/// Install the `tracing` subscriber shared by the drivers.
///
/// The filter comes from `RUST_LOG` and output goes to stderr, leaving stdout
/// to the prompts and the result. Calling it again is a no-op.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Multiply two signed 64-bit integers.
///
/// Overflow wraps around (two's complement) instead of panicking. The symbol
/// is left unmangled so a host process can resolve `multiply` from the shared
/// library.
#[no_mangle]
pub extern "C" fn multiply(a: i64, b: i64) -> i64 {
    a.wrapping_mul(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_products() {
        assert_eq!(multiply(3, 4), 12);
        assert_eq!(multiply(-2, 5), -10);
        assert_eq!(multiply(0, 100), 0);
        assert_eq!(multiply(-6, -7), 42);
    }

    #[test]
    fn overflow_wraps() {
        assert_eq!(multiply(i64::MAX, 2), -2);
        assert_eq!(multiply(i64::MIN, -1), i64::MIN);
        assert_eq!(multiply(1 << 32, 1 << 32), 0);
    }

    #[test]
    fn matches_wrapping_mul() {
        let samples = [i64::MIN, -1_000_003, -7, -1, 0, 1, 2, 99_991, i64::MAX];
        for &a in &samples {
            for &b in &samples {
                assert_eq!(multiply(a, b), a.wrapping_mul(b), "{a} * {b}");
            }
        }
    }

    #[test]
    fn init_logging_twice() {
        init_logging();
        init_logging();
        tracing::debug!("still usable after a second init");
    }

    #[test]
    fn callable_through_c_fn_pointer() {
        // Hosts see the function through a plain C function pointer.
        let f: extern "C" fn(i64, i64) -> i64 = multiply;
        assert_eq!(f(6, 7), 42);
    }
}
