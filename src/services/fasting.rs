use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::services::recommendation::Intensity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FastingProtocol {
    #[serde(rename = "12:12")]
    TwelveTwelve,
    #[serde(rename = "14:10")]
    FourteenTen,
    #[serde(rename = "16:8")]
    SixteenEight,
    #[serde(rename = "18:6")]
    EighteenSix,
    #[serde(rename = "20:4")]
    TwentyFour,
    #[serde(rename = "OMAD")]
    OneMealADay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FastingDifficulty {
    Beginner,
    Intermediate,
    Advanced,
    Extreme,
}

impl FastingDifficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            FastingDifficulty::Beginner => "Beginner",
            FastingDifficulty::Intermediate => "Intermediate",
            FastingDifficulty::Advanced => "Advanced",
            FastingDifficulty::Extreme => "Extreme",
        }
    }
}

/// fasting hours, eating-window hours, difficulty
static PROTOCOL_TABLE: [(FastingProtocol, u32, u32, FastingDifficulty); 6] = [
    (FastingProtocol::TwelveTwelve, 12, 12, FastingDifficulty::Beginner),
    (FastingProtocol::FourteenTen, 14, 10, FastingDifficulty::Beginner),
    (FastingProtocol::SixteenEight, 16, 8, FastingDifficulty::Intermediate),
    (FastingProtocol::EighteenSix, 18, 6, FastingDifficulty::Advanced),
    (FastingProtocol::TwentyFour, 20, 4, FastingDifficulty::Advanced),
    (FastingProtocol::OneMealADay, 23, 1, FastingDifficulty::Extreme),
];

/// Upper bound (exclusive) of elapsed fasting hours, highest advisable intensity.
const INTENSITY_BY_FASTING_HOURS: [(f64, Intensity); 3] = [
    (12.0, Intensity::High),
    (16.0, Intensity::Moderate),
    (20.0, Intensity::Low),
];

/// Upper bound (exclusive) of elapsed fasting hours, phase label.
const PHASE_BY_FASTING_HOURS: [(f64, &str); 4] = [
    (4.0, "Fed"),
    (12.0, "Early Fasting"),
    (18.0, "Fat Burning"),
    (24.0, "Ketosis"),
];

/// "16:8", "18 / 6"
static RATIO_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})\s*[:/]\s*(\d{1,2})$").ok());

impl FastingProtocol {
    /// Parses "16:8", "16/8", "omad". The two numbers must cover a full day.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("omad") {
            return Some(FastingProtocol::OneMealADay);
        }

        let captures = RATIO_PATTERN.as_ref()?.captures(value)?;
        let fasting: u32 = captures.get(1)?.as_str().parse().ok()?;
        let eating: u32 = captures.get(2)?.as_str().parse().ok()?;

        if fasting + eating != 24 {
            return None;
        }

        PROTOCOL_TABLE
            .iter()
            .find(|(_, hours, _, _)| *hours == fasting)
            .map(|(protocol, _, _, _)| *protocol)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FastingProtocol::TwelveTwelve => "12:12",
            FastingProtocol::FourteenTen => "14:10",
            FastingProtocol::SixteenEight => "16:8",
            FastingProtocol::EighteenSix => "18:6",
            FastingProtocol::TwentyFour => "20:4",
            FastingProtocol::OneMealADay => "OMAD",
        }
    }

    fn row(&self) -> &'static (FastingProtocol, u32, u32, FastingDifficulty) {
        PROTOCOL_TABLE
            .iter()
            .find(|(protocol, _, _, _)| protocol == self)
            .unwrap_or(&PROTOCOL_TABLE[0])
    }

    pub fn fasting_hours(&self) -> u32 {
        self.row().1
    }

    pub fn eating_window_hours(&self) -> u32 {
        self.row().2
    }

    pub fn difficulty(&self) -> FastingDifficulty {
        self.row().3
    }
}

pub fn training_intensity_for_fasting_hours(hours: f64) -> Intensity {
    INTENSITY_BY_FASTING_HOURS
        .iter()
        .find(|(limit, _)| hours < *limit)
        .map(|(_, intensity)| *intensity)
        .unwrap_or(Intensity::None)
}

pub fn fasting_phase(hours: f64) -> &'static str {
    PHASE_BY_FASTING_HOURS
        .iter()
        .find(|(limit, _)| hours < *limit)
        .map(|(_, phase)| *phase)
        .unwrap_or("Deep Ketosis")
}
