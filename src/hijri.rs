//! Hijri Calendar Module
//!
//! Tabular Gregorian→Hijri conversion (Kuwaiti-algorithm style Julian day
//! arithmetic), used to annotate output. Good enough for calendar display;
//! actual month starts depend on moon sighting, which is what the engine's
//! hijri day-shift option exists to absorb.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

// ===================== MONTH NAMES =====================

pub const HIJRI_MONTH_NAMES_EN: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabiʿ al-awwal",
    "Rabiʿ al-thani",
    "Jumada al-ula",
    "Jumada al-akhirah",
    "Rajab",
    "Shaʿban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qadah",
    "Dhu al-Hijjah",
];

pub const HIJRI_MONTH_NAMES_AR: [&str; 12] = [
    "محرم",
    "صفر",
    "ربيع الأول",
    "ربيع الآخر",
    "جمادى الأولى",
    "جمادى الآخرة",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذو القعدة",
    "ذو الحجة",
];

// ===================== CONVERSION =====================

/// A date in the Islamic calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HijriDate {
    pub year: i64,
    /// 1-12
    pub month: u32,
    pub day: u32,
}

impl HijriDate {
    pub fn month_name_en(&self) -> &'static str {
        HIJRI_MONTH_NAMES_EN.get(self.month as usize - 1).copied().unwrap_or("")
    }

    pub fn month_name_ar(&self) -> &'static str {
        HIJRI_MONTH_NAMES_AR.get(self.month as usize - 1).copied().unwrap_or("")
    }
}

/// Convert a Gregorian date to the tabular Hijri calendar.
///
/// Truncating integer division throughout, as the Fliegel-Van Flandern
/// Julian day formula expects.
pub fn gregorian_to_hijri(date: NaiveDate) -> HijriDate {
    let g_year = i64::from(date.year());
    let g_month = i64::from(date.month());
    let g_day = i64::from(date.day());

    // Julian day number for the Gregorian date
    let a = (g_month - 14) / 12;
    let jd = 1461 * (g_year + 4800 + a) / 4 + 367 * (g_month - 2 - 12 * a) / 12
        - 3 * ((g_year + 4900 + a) / 100) / 4
        + g_day
        - 32075;

    // Islamic date from the Julian day number (30-year tabular cycle,
    // epoch JD 1948440 = 1 Muharram 1 AH)
    let l = jd - 1948440 + 10632;
    let n = (l - 1) / 10631;
    let l = l - 10631 * n + 354;
    let j = ((10985 - l) / 5316) * (50 * l / 17719) + (l / 5670) * (43 * l / 15238);
    let l = l - ((30 - j) / 15) * (17719 * j / 50) - (j / 16) * (15238 * j / 43) + 29;
    let month = 24 * l / 709;
    let day = l - 709 * month / 24;
    let year = 30 * n + j - 30;

    HijriDate { year, month: month as u32, day: day as u32 }
}

// ===================== TESTS =====================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_epoch() {
        // 1 Muharram 1 AH corresponds to 622-07-19 (proleptic Gregorian)
        // in the tabular calendar
        let h = gregorian_to_hijri(date(622, 7, 19));
        assert_eq!((h.year, h.month, h.day), (1, 1, 1));
    }

    #[test]
    fn test_ramadan_2024() {
        // Ramadan 1445 began around 2024-03-11 (tabular: 1 Ramadan 1445)
        let h = gregorian_to_hijri(date(2024, 3, 11));
        assert_eq!(h.year, 1445);
        assert_eq!(h.month, 9);
        assert_eq!(h.month_name_en(), "Ramadan");
        assert!(h.day <= 2, "expected start of Ramadan, got day {}", h.day);
    }

    #[test]
    fn test_dates_monotonic_across_month() {
        // Consecutive Gregorian days never move the Hijri date backwards
        let mut prev = gregorian_to_hijri(date(2024, 1, 1));
        let mut d = date(2024, 1, 2);
        while d.year() == 2024 {
            let h = gregorian_to_hijri(d);
            let prev_ord = prev.year * 372 + i64::from(prev.month) * 31 + i64::from(prev.day);
            let ord = h.year * 372 + i64::from(h.month) * 31 + i64::from(h.day);
            assert!(ord > prev_ord, "went backwards at {d}: {prev:?} -> {h:?}");
            assert!((1..=12).contains(&h.month));
            assert!((1..=30).contains(&h.day));
            prev = h;
            d = d.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_month_names() {
        let h = HijriDate { year: 1446, month: 1, day: 1 };
        assert_eq!(h.month_name_en(), "Muharram");
        assert_eq!(h.month_name_ar(), "محرم");
    }
}
