use std::fmt;
use std::str::FromStr;

/// 证书领取所需的最低分
pub const PASS_THRESHOLD: f64 = 70.0;

const EXCELLENT_MIN: f64 = 90.0;
const GOOD_MIN: f64 = 70.0;
const AVERAGE_MIN: f64 = 60.0;

/// 成绩分段：>=90 优秀，70–89 良好，60–69 一般，<60 较差
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    Average,
    Poor,
}

impl ScoreBand {
    pub const ALL: [ScoreBand; 4] = [
        ScoreBand::Excellent,
        ScoreBand::Good,
        ScoreBand::Average,
        ScoreBand::Poor,
    ];

    pub fn from_score(score: f64) -> Self {
        if score >= EXCELLENT_MIN {
            ScoreBand::Excellent
        } else if score >= GOOD_MIN {
            ScoreBand::Good
        } else if score >= AVERAGE_MIN {
            ScoreBand::Average
        } else {
            ScoreBand::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "excellent",
            ScoreBand::Good => "good",
            ScoreBand::Average => "average",
            ScoreBand::Poor => "poor",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoreBand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScoreBand::ALL
            .into_iter()
            .find(|band| band.as_str() == s)
            .ok_or_else(|| format!("Invalid score band: {s}"))
    }
}

pub fn is_certificate_eligible(score: f64) -> bool {
    score >= PASS_THRESHOLD
}

pub fn eligibility_label(score: f64) -> &'static str {
    if is_certificate_eligible(score) {
        "eligible"
    } else {
        "not_eligible"
    }
}
