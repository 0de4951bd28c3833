//! Qualitative color sequences, same values as plotly's `px.colors.qualitative`

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

const G10: [&str; 10] = [
    "#3366CC", "#DC3912", "#FF9900", "#109618", "#990099",
    "#0099C6", "#DD4477", "#66AA00", "#B82E2E", "#316395",
];

const PLOTLY: [&str; 10] = [
    "#636EFA", "#EF553B", "#00CC96", "#AB63FA", "#FFA15A",
    "#19D3F3", "#FF6692", "#B6E880", "#FF97FF", "#FECB52",
];

const D3: [&str; 10] = [
    "#1F77B4", "#FF7F0E", "#2CA02C", "#D62728", "#9467BD",
    "#8C564B", "#E377C2", "#7F7F7F", "#BCBD22", "#17BECF",
];

const T10: [&str; 10] = [
    "#4C78A8", "#F58518", "#E45756", "#72B7B2", "#54A24B",
    "#EECA3B", "#B279A2", "#FF9DA6", "#9D755D", "#BAB0AC",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    #[default]
    G10,
    Plotly,
    D3,
    T10,
}

impl Palette {
    pub fn colors(&self) -> &'static [&'static str] {
        match self {
            Palette::G10 => &G10,
            Palette::Plotly => &PLOTLY,
            Palette::D3 => &D3,
            Palette::T10 => &T10,
        }
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Palette::G10 => write!(f, "g10"),
            Palette::Plotly => write!(f, "plotly"),
            Palette::D3 => write!(f, "d3"),
            Palette::T10 => write!(f, "t10"),
        }
    }
}

impl FromStr for Palette {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "g10" => Ok(Palette::G10),
            "plotly" => Ok(Palette::Plotly),
            "d3" => Ok(Palette::D3),
            "t10" => Ok(Palette::T10),
            other => Err(format!("unknown palette '{}' (expected g10, plotly, d3, t10)", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_g10_is_default() {
        assert_eq!(Palette::default(), Palette::G10);
        assert_eq!(Palette::G10.colors()[0], "#3366CC");
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("G10".parse::<Palette>().unwrap(), Palette::G10);
        assert_eq!("Plotly".parse::<Palette>().unwrap(), Palette::Plotly);
        assert!("viridis".parse::<Palette>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for p in [Palette::G10, Palette::Plotly, Palette::D3, Palette::T10] {
            assert_eq!(p.to_string().parse::<Palette>().unwrap(), p);
        }
    }
}
