//! Reply templates for the savings programme

use crate::models::{AccountBalanceRecord, AccountHistoryRecord};

/// The backend returns the latest transactions; never show more than this.
pub const MAX_HISTORY_LINES: usize = 10;

const GREETING: &str = "_Assalamu'alaikum Wr. Wb,_";
const CLOSING: &str = "_Wassalamu'alaikum Wr. Wb_";

/// Contact details appended to every templated reply.
#[derive(Debug, Clone)]
pub struct Contact {
    pub name: String,
    pub phone: String,
}

impl Contact {
    fn line(&self) -> String {
        format!("Info lebih lanjut hub\n📞 *{}* {}", self.name, self.phone)
    }
}

pub fn balance_reply(record: &AccountBalanceRecord, contact: &Contact) -> String {
    format!(
        "{}\n\nBpk/Ibu {},\n\n```Saldo Anda : {}\nTransaksi Terakhir : {}```\n\n{}\n\nTerima Kasih.\n\n{}",
        GREETING,
        record.nama,
        record.saldo,
        record.updated,
        contact.line(),
        CLOSING
    )
}

/// One `<date>: <amount> (<kind>)` line per entry, in the order received.
pub fn history_lines(record: &AccountHistoryRecord) -> String {
    record
        .mutasi
        .iter()
        .take(MAX_HISTORY_LINES)
        .map(|entry| format!("{}: {} ({})\n", entry.tgl, entry.total, entry.jenis))
        .collect()
}

pub fn history_reply(record: &AccountHistoryRecord, contact: &Contact) -> String {
    format!(
        "{}\n\nBpk/Ibu {},\n\nBerikut mutasi {} transaksi terakhir : \n```{}```\n\n{}\n\n{}",
        GREETING,
        record.nama,
        MAX_HISTORY_LINES,
        history_lines(record),
        contact.line(),
        CLOSING
    )
}

pub fn info_reply(contact: &Contact) -> String {
    format!(
        "Selamat Datang di Program Tabungan Umroh\n🕋 Musahefiz Blora\n\n\
         *saldo* - _untuk cek saldo tabungan_\n\
         *mutasi* - _untuk cek mutasi tabungan_\n\n\
         *Bank Transfer:*\n\
         ```Bank Syariah Indonesia\nKode Bank 451\nNo. Rek 7264943811\na.n. Tabungan Musahefiz Blora``` \n\n\n\
         {}\n\nTerima Kasih.",
        contact.line()
    )
}
