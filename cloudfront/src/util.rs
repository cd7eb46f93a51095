use aws_smithy_types::DateTime;
use aws_smithy_types::date_time::Format;

/// Render an API timestamp as ISO-8601, e.g. `2019-12-16T23:48:18Z`.
pub fn iso8601(date_time: &DateTime) -> String {
    match date_time.fmt(Format::DateTime) {
        Ok(formatted) => formatted,
        Err(e) => {
            tracing::warn!("Failed to format timestamp {}: {}", date_time, e);
            date_time.to_string()
        }
    }
}
