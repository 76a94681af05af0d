// src/common/period.rs

use std::{fmt, str::FromStr};

use chrono::{Datelike, Local, Months, NaiveDate};

use crate::common::error::AppError;

// Anos que cabem em 4 dígitos
const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

/// Chave de período mensal no formato `YYYYMM` (ex: "202403").
///
/// É a chave usada em `meter_readings.yyyymm` e `invoices.yyyymm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return None;
        }
        // Garante que existe o dia 1 deste mês
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    /// Mês corrente, no fuso local do servidor.
    pub fn current() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self { year: date.year(), month: date.month() }
    }

    /// Período imediatamente anterior (vira o ano em janeiro).
    pub fn prev(self) -> Self {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .and_then(|d| d.checked_sub_months(Months::new(1)))
            .and_then(|d| Self::new(d.year(), d.month()))
            // 000101 não tem mês anterior representável
            .unwrap_or(self)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}", self.year, self.month)
    }
}

impl FromStr for Period {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::InvalidPeriod(s.to_string());

        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let year: i32 = s[..4].parse().map_err(|_| invalid())?;
        let month: u32 = s[4..].parse().map_err(|_| invalid())?;

        Period::new(year, month).ok_or_else(invalid)
    }
}
