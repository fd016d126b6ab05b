//! Extraction prompt: the fixed schema instruction wrapped around the user's message.

use chrono::NaiveDate;

/// Schema description sent with every request. Must stay byte-for-byte stable.
pub const SCHEMA_INSTRUCTION: &str = concat!(
    "Your input is a transaction message, possibly transcribed from voice. ",
    "Extract structured details as JSON with exactly these fields: ",
    "Amount, Transaction Type, Bank Name, Card Type, Paid To, Merchant, ",
    "Transaction Mode, Transaction Date, Reference Number, and Tag. ",
    "Transaction Type must be either \"debit\" or \"credit\". ",
    "Tag is the category of spending inferred from the merchant: ",
    "if Amazon, then Shopping; if Zomato or Domino's, then Eating; and so on. ",
    "If the mode of payment is not mentioned, set Transaction Mode to \"cash\". ",
    "Transaction Date must use the format dd/mm/yy. ",
    "If any field is missing, set it to null. ",
    "Return only a single JSON object, or a JSON array of objects when the message ",
    "mentions multiple transactions or multiple items with multiple prices. ",
    "Do not say anything else. If no transaction is present, return null. ",
    "Handle unstructured, grammatically incorrect, and short human input: ",
    "for example, 'today I spent 500 at Domino's' must be extracted correctly.",
);

/// `dd/mm/yy`, the format used for Transaction Date.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%y").to_string()
}

/// Build the full prompt for one message.
///
/// Relative dates ("today", "yesterday") are resolved by the model against `today`.
pub fn build_prompt(message: &str, today: NaiveDate) -> String {
    let today = format_date(today);

    format!(
        "{SCHEMA_INSTRUCTION}\n\
         Today's date is {today}. Resolve relative dates such as \"today\" or \"yesterday\" against it.\n\
         Message: {message}"
    )
}
