use crate::matrix::scalar::{is_negligible, Scalar};
use crate::settings::SolverSettings;

/// Formats a value the way the trace shows it: fixed precision, right
/// aligned, followed by one separator space.
///
/// Anything below `settings.eps` is printed as an exact zero so that
/// elimination noise never shows up as `-0.0000`. The value itself is not
/// changed.
pub fn format_value_with<T: Scalar>(x: T, settings: &SolverSettings) -> String {
    let x = if is_negligible(x, settings.eps) {
        T::zero()
    } else {
        x
    };
    format!(
        "{:>width$.prec$} ",
        x,
        width = settings.width,
        prec = settings.precision
    )
}

/// [`format_value_with`] using the default settings.
pub fn format_value<T: Scalar>(x: T) -> String {
    format_value_with(x, &SolverSettings::default())
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
