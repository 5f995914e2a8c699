//! Instruction prompt shared by every backend.

use chrono::{Days, NaiveDate};

/// Build the fixed instruction prompt for one user question.
///
/// The user's text is embedded verbatim. Default dates for questions that
/// name no range are computed here (7 days back through today) and written
/// into the prompt as concrete values; the model is never asked to do date
/// arithmetic itself.
pub fn build_prompt(user_query: &str, today: NaiveDate) -> String {
    let default_start = today
        .checked_sub_days(Days::new(7))
        .unwrap_or(today)
        .format("%Y-%m-%d");
    let default_end = today.format("%Y-%m-%d");

    format!(
        r#"You are a strict API parser that converts user cost questions into structured JSON for an AWS cost analyzer CLI.

Your task:
- Analyze the user's question about AWS costs.
- Return only a valid JSON object with these keys:
  - "service": the exact AWS service display name in Title Case (e.g. "Amazon Simple Storage Service"). If no specific service is mentioned, set this to "ALL".
  - "start_date": the range start, formatted as YYYY-MM-DD or YYYY-MM-DDTHH:MM:SSZ. If the question names no date range, use {default_start}.
  - "end_date": the range end, in the same format. If the question names no date range, use {default_end}.
  - "granularity": exactly one of "DAILY", "MONTHLY", or "HOURLY". Choose:
    - "MONTHLY" if the user asks for monthly summaries or refers to whole months.
    - "DAILY" if the user asks for daily summaries or specific date ranges.
    - "HOURLY" only if the user explicitly asks for hourly breakdowns.

Guidelines:
- Do not include any explanation, notes, markdown, or additional text outside the JSON object.
- The output must be only valid JSON without code blocks.
- Ensure start_date is before or equal to end_date.
- Follow the AWS Cost Explorer GetCostAndUsage parameter conventions.

Example input:
What was my EC2 cost last week?

Example output:
{{
  "service": "Amazon Elastic Compute Cloud",
  "start_date": "{default_start}",
  "end_date": "{default_end}",
  "granularity": "DAILY"
}}

Now convert this question:

"{user_query}"
"#
    )
}
