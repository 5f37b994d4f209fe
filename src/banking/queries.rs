//! The three savings-account lookups the backend exposes.

use serde::de::DeserializeOwned;

use crate::format::{self, Contact};
use crate::models::{AccountBalanceRecord, AccountHistoryRecord, AccountInfoRecord};

/// One backend endpoint: where to POST, where the record sits in the
/// response, and how a found record becomes a chat reply.
pub trait AccountQuery {
    /// Used in log lines.
    const NAME: &'static str;
    const PATH: &'static str;
    /// Key of the record inside the response envelope, if it has one.
    const RECORD_KEY: Option<&'static str>;

    type Record: DeserializeOwned + Default;

    fn render(record: &Self::Record, contact: &Contact) -> String;
}

pub struct BalanceQuery;

impl AccountQuery for BalanceQuery {
    const NAME: &'static str = "saldo";
    const PATH: &'static str = "/api/ceksaldo";
    const RECORD_KEY: Option<&'static str> = Some("clientsaldo");

    type Record = AccountBalanceRecord;

    fn render(record: &Self::Record, contact: &Contact) -> String {
        format::balance_reply(record, contact)
    }
}

pub struct HistoryQuery;

impl AccountQuery for HistoryQuery {
    const NAME: &'static str = "mutasi";
    const PATH: &'static str = "/api/cekmutasi";
    const RECORD_KEY: Option<&'static str> = Some("clientmutasi");

    type Record = AccountHistoryRecord;

    fn render(record: &Self::Record, contact: &Contact) -> String {
        format::history_reply(record, contact)
    }
}

pub struct InfoQuery;

impl AccountQuery for InfoQuery {
    const NAME: &'static str = "info";
    const PATH: &'static str = "/api/info";
    const RECORD_KEY: Option<&'static str> = None;

    type Record = AccountInfoRecord;

    fn render(_record: &Self::Record, contact: &Contact) -> String {
        format::info_reply(contact)
    }
}
