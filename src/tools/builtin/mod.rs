//! Built-in demo tools.
//!
//! Each factory function returns a configured
//! [`FunctionTool`](crate::tools::FunctionTool); the underlying pure
//! functions are exported alongside so they can be called and tested
//! directly.

pub mod calculator;
pub mod clock;
pub mod text;
pub mod weather;

pub use calculator::{calculator_tool, evaluate};
pub use clock::{current_time_tool, current_timestamp};
pub use text::{reverse_text, reverse_text_tool};
pub use weather::{get_weather_tool, weather_for_date};
