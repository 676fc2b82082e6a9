//! Built-in alert condition queries, addressable by id or category.

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SqlTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub sql: &'static str,
}

static TEMPLATES: &[SqlTemplate] = &[
    SqlTemplate {
        id: "snowpipe-error",
        name: "Snowpipe Error Detection",
        category: "snowpipe",
        sql: "-- Pipes that reported a load error in the last ten minutes
SELECT
  pipe_name,
  error_message,
  last_error_time,
  COUNT(*) AS error_count
FROM pipe_status
WHERE error_message IS NOT NULL
  AND last_error_time >= DATEADD('minute', -10, CURRENT_TIMESTAMP)
GROUP BY pipe_name, error_message, last_error_time
HAVING COUNT(*) > 0
ORDER BY last_error_time DESC",
    },
    SqlTemplate {
        id: "snowpipe-latency",
        name: "Snowpipe Latency Alert",
        category: "snowpipe",
        sql: "-- Pipes whose oldest queued file is more than 30 minutes old
SELECT
  pipe_name,
  DATEDIFF('minute', earliest_file_timestamp, CURRENT_TIMESTAMP) AS latency_minutes,
  files_queued
FROM pipe_status
WHERE earliest_file_timestamp IS NOT NULL
  AND DATEDIFF('minute', earliest_file_timestamp, CURRENT_TIMESTAMP) >= 30
ORDER BY latency_minutes DESC",
    },
    SqlTemplate {
        id: "snowpark-error-logs",
        name: "Snowpark Error Logs",
        category: "snowpark",
        sql: "-- ERROR and FATAL messages from functions and procedures
SELECT
  executable_name,
  severity_text,
  COUNT(*) AS error_count
FROM event_table
WHERE severity_text IN ('ERROR', 'FATAL')
  AND event_time >= DATEADD('minute', -10, CURRENT_TIMESTAMP)
GROUP BY executable_name, severity_text
ORDER BY error_count DESC",
    },
    SqlTemplate {
        id: "cost-spike",
        name: "Warehouse Cost Spike",
        category: "cost",
        sql: "-- Hourly credits more than 50% above the trailing 24 hour average
WITH hourly AS (
  SELECT
    warehouse_name,
    DATE_TRUNC('hour', start_time) AS hour_bucket,
    SUM(credits_used) AS hourly_credits
  FROM warehouse_metering_history
  WHERE start_time >= DATEADD('day', -2, CURRENT_TIMESTAMP)
  GROUP BY warehouse_name, hour_bucket
)
SELECT
  warehouse_name,
  hour_bucket,
  hourly_credits,
  AVG(hourly_credits) OVER (
    PARTITION BY warehouse_name
    ORDER BY hour_bucket
    ROWS BETWEEN 24 PRECEDING AND 1 PRECEDING
  ) AS avg_hourly_credits_24h
FROM hourly
QUALIFY hourly_credits > 1.5 * avg_hourly_credits_24h",
    },
    SqlTemplate {
        id: "cost-spike-notification",
        name: "Cost Spike Notification",
        category: "cost",
        sql: "-- Message body sent when the cost spike alert fires
SELECT
  '{{ alert_id }}' AS alert_id,
  {{ severity }} AS severity,
  'Warehouse {{ warehouse_name }} used {{ hourly_credits }} credits' AS message,
  CURRENT_TIMESTAMP AS sent_at",
    },
    SqlTemplate {
        id: "null-coverage",
        name: "Null Coverage Threshold",
        category: "data-quality",
        sql: "-- Columns where more than 5% of today's rows are NULL
SELECT
  '{{ table_name }}' AS table_name,
  SUM(CASE WHEN {{ column_name }} IS NULL THEN 1 ELSE 0 END) / COUNT(*) AS null_ratio
FROM {{ table_name }}
WHERE loaded_at >= DATE_TRUNC('day', CURRENT_TIMESTAMP)
HAVING null_ratio > 0.05",
    },
    SqlTemplate {
        id: "unauthorized-access",
        name: "Unauthorized Access Attempts",
        category: "security",
        sql: "-- Users with repeated failed logins in the last hour
SELECT
  user_name,
  client_ip,
  COUNT(*) AS failed_attempts
FROM login_history
WHERE is_success = 'NO'
  AND event_timestamp >= DATEADD('hour', -1, CURRENT_TIMESTAMP)
GROUP BY user_name, client_ip
HAVING COUNT(*) >= 5
ORDER BY failed_attempts DESC",
    },
];

pub fn all_templates() -> &'static [SqlTemplate] {
    TEMPLATES
}

pub fn get_template(id: &str) -> Option<&'static SqlTemplate> {
    TEMPLATES.iter().find(|template| template.id == id)
}

/// SQL of the template with `id`, or [`Error::UnknownTemplate`].
pub fn template_sql(id: &str) -> Result<&'static str> {
    get_template(id)
        .map(|template| template.sql)
        .ok_or_else(|| Error::UnknownTemplate(id.to_string()))
}

pub fn templates_by_category(category: &str) -> Vec<&'static SqlTemplate> {
    TEMPLATES
        .iter()
        .filter(|template| template.category == category)
        .collect()
}

/// Names of the `{{ ... }}` placeholders in `sql`, in order of first use.
///
/// Placeholders inside string literals count: a notification body quotes
/// most of its substitution points.
pub fn template_variables(sql: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = sql;
    while let Some(open) = rest.find("{{") {
        let inner = &rest[open + 2..];
        match inner.find('}') {
            Some(close) if close > 0 && inner[close..].starts_with("}}") => {
                let name = inner[..close].trim();
                if !name.is_empty() && !names.contains(&name) {
                    names.push(name);
                }
                rest = &inner[close + 2..];
            }
            _ => rest = &rest[open + 1..],
        }
    }
    names
}
