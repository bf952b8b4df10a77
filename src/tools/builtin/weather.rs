//! Mock weather lookup tool.
//!
//! Not a real weather source: today is always sunny and every other date is
//! rainy. The date comparison is a plain string match against today's local
//! date in `YYYY-MM-DD` form.

use chrono::Local;
use serde_json::json;

use crate::tools::{FunctionTool, ToolResult};

const SUNNY_REPORT: &str = "Sunny, 72°F";
const RAINY_REPORT: &str = "Rainy, 55°F";

/// Returns the mock weather report for a `YYYY-MM-DD` date string.
///
/// Surrounding whitespace in the input is ignored.
#[must_use]
pub fn weather_for_date(date: &str) -> &'static str {
    let today = Local::now().format("%Y-%m-%d").to_string();
    if date.trim() == today {
        SUNNY_REPORT
    } else {
        RAINY_REPORT
    }
}

/// Creates the mock weather tool.
pub fn get_weather_tool() -> FunctionTool {
    FunctionTool::new(
        "get_weather",
        "Returns weather information for a given date. \
         Input should be a date formatted as YYYY-MM-DD. \
         Use current_time first to get today's date if needed.",
        |args, _ctx| {
            Box::pin(async move {
                let date = args.get("date").and_then(|v| v.as_str()).unwrap_or("");
                ToolResult::success(json!({ "weather": weather_for_date(date) }))
            })
        },
    )
    .with_parameters_schema(json!({
        "type": "object",
        "properties": {
            "date": {
                "type": "string",
                "description": "The date to look up, formatted as YYYY-MM-DD"
            }
        },
        "required": ["date"]
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{Tool, ToolContext};
    use std::collections::HashMap;

    #[test]
    fn todays_date_is_sunny() {
        let today = Local::now().format("%Y-%m-%d").to_string();
        assert_eq!(weather_for_date(&today), SUNNY_REPORT);
        assert_eq!(weather_for_date(&format!("  {today} ")), SUNNY_REPORT);
    }

    #[test]
    fn other_dates_are_rainy() {
        assert_eq!(weather_for_date("1999-12-31"), RAINY_REPORT);
        assert_eq!(weather_for_date("2999-01-01"), RAINY_REPORT);
        assert_eq!(weather_for_date("not a date"), RAINY_REPORT);
        assert_eq!(weather_for_date(""), RAINY_REPORT);
    }

    #[tokio::test]
    async fn tool_reports_for_requested_date() {
        let tool = get_weather_tool();
        let mut args = HashMap::new();
        args.insert("date".to_string(), json!("2000-01-01"));

        let result = tool.run_async(args, &ToolContext::new()).await;
        assert!(result.is_success());
        assert_eq!(result.data()["weather"], json!(RAINY_REPORT));
    }
}
