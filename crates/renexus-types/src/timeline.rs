//! Life-timeline types: the digital era a user grew up in and which
//! platforms defined their formative years.

use serde::{Deserialize, Serialize};

use std::fmt;

/// Social platforms by launch year, used to reconstruct which networks
/// were new during a user's formative window.
const PLATFORM_LAUNCHES: [(i32, &str); 7] = [
    (2003, "MySpace"),
    (2004, "Facebook"),
    (2005, "YouTube"),
    (2006, "Twitter"),
    (2010, "Instagram"),
    (2011, "Snapchat"),
    (2016, "TikTok"),
];

/// Formative social-media years: ages 13 through 25.
const FORMATIVE_START_AGE: i32 = 13;
const FORMATIVE_END_AGE: i32 = 25;

/// Digital-generation cohort by birth year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigitalEra {
    GenZ,
    Millennial,
    GenX,
    PreDigital,
}

impl DigitalEra {
    /// Cohort boundaries: 2000, 1985, 1970.
    pub fn from_birth_year(birth_year: i32) -> Self {
        if birth_year >= 2000 {
            DigitalEra::GenZ
        } else if birth_year >= 1985 {
            DigitalEra::Millennial
        } else if birth_year >= 1970 {
            DigitalEra::GenX
        } else {
            DigitalEra::PreDigital
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DigitalEra::GenZ => "Gen Z",
            DigitalEra::Millennial => "Millennial",
            DigitalEra::GenX => "Gen X",
            DigitalEra::PreDigital => "Boomer+",
        }
    }

    pub fn context(&self) -> &'static str {
        match self {
            DigitalEra::GenZ => "True digital native, grew up with smartphones and social media",
            DigitalEra::Millennial => {
                "Witnessed the birth of social media, adapted to digital world"
            }
            DigitalEra::GenX => "Experienced pre-digital childhood, adapted to internet as adult",
            DigitalEra::PreDigital => "Digital immigrant, may need more privacy guidance",
        }
    }
}

impl fmt::Display for DigitalEra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A platform that launched inside the user's formative window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformEcho {
    pub platform: String,
    pub launch_year: i32,
    /// How old the user was when the platform launched.
    pub age_at_launch: i32,
}

impl fmt::Display for PlatformEcho {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (age {})", self.platform, self.age_at_launch)
    }
}

/// Age-derived life timeline with digital-era context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifeTimeline {
    pub birth_year: i32,
    pub high_school_years: (i32, i32),
    pub college_years: (i32, i32),
    pub era: DigitalEra,
    /// Platforms that launched while the user was 13 to 25.
    pub formative_platforms: Vec<PlatformEcho>,
}

impl LifeTimeline {
    /// Build the timeline for a user of `age` as of `current_year`.
    pub fn for_age(age: u8, current_year: i32) -> Self {
        let birth_year = current_year - i32::from(age);

        let formative_start = birth_year + FORMATIVE_START_AGE;
        let formative_end = birth_year + FORMATIVE_END_AGE;

        let formative_platforms = PLATFORM_LAUNCHES
            .iter()
            .filter(|(year, _)| (formative_start..=formative_end).contains(year))
            .map(|(year, platform)| PlatformEcho {
                platform: (*platform).to_string(),
                launch_year: *year,
                age_at_launch: year - birth_year,
            })
            .collect();

        Self {
            birth_year,
            high_school_years: (birth_year + 14, birth_year + 18),
            college_years: (birth_year + 18, birth_year + 22),
            era: DigitalEra::from_birth_year(birth_year),
            formative_platforms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_era_boundaries() {
        assert_eq!(DigitalEra::from_birth_year(2000), DigitalEra::GenZ);
        assert_eq!(DigitalEra::from_birth_year(1999), DigitalEra::Millennial);
        assert_eq!(DigitalEra::from_birth_year(1985), DigitalEra::Millennial);
        assert_eq!(DigitalEra::from_birth_year(1984), DigitalEra::GenX);
        assert_eq!(DigitalEra::from_birth_year(1970), DigitalEra::GenX);
        assert_eq!(DigitalEra::from_birth_year(1969), DigitalEra::PreDigital);
    }

    #[test]
    fn test_timeline_for_25_year_old_in_2026() {
        let timeline = LifeTimeline::for_age(25, 2026);
        assert_eq!(timeline.birth_year, 2001);
        assert_eq!(timeline.high_school_years, (2015, 2019));
        assert_eq!(timeline.college_years, (2019, 2023));
        assert_eq!(timeline.era, DigitalEra::GenZ);
        // Formative window 2014..=2026: only TikTok (2016) of the launch table.
        assert_eq!(timeline.formative_platforms.len(), 1);
        assert_eq!(timeline.formative_platforms[0].platform, "TikTok");
        assert_eq!(timeline.formative_platforms[0].age_at_launch, 15);
    }

    #[test]
    fn test_timeline_for_35_year_old_in_2026() {
        let timeline = LifeTimeline::for_age(35, 2026);
        assert_eq!(timeline.birth_year, 1991);
        assert_eq!(timeline.era, DigitalEra::Millennial);
        // Formative window 2004..=2016 covers every launch from Facebook on.
        let platforms: Vec<&str> = timeline
            .formative_platforms
            .iter()
            .map(|p| p.platform.as_str())
            .collect();
        assert_eq!(
            platforms,
            vec![
                "Facebook",
                "YouTube",
                "Twitter",
                "Instagram",
                "Snapchat",
                "TikTok"
            ]
        );
    }

    #[test]
    fn test_formative_window_edges() {
        // Born 1990: window is 2003..=2015. MySpace lands exactly on the
        // lower edge, TikTok (2016) falls just outside.
        let timeline = LifeTimeline::for_age(36, 2026);
        assert_eq!(timeline.birth_year, 1990);
        let platforms: Vec<&str> = timeline
            .formative_platforms
            .iter()
            .map(|p| p.platform.as_str())
            .collect();
        assert!(platforms.contains(&"MySpace"));
        assert!(!platforms.contains(&"TikTok"));
        assert_eq!(timeline.formative_platforms[0].age_at_launch, 13);
    }

    #[test]
    fn test_platform_echo_display() {
        let echo = PlatformEcho {
            platform: "Facebook".to_string(),
            launch_year: 2004,
            age_at_launch: 14,
        };
        assert_eq!(echo.to_string(), "Facebook (age 14)");
    }

    #[test]
    fn test_older_user_has_no_formative_platforms() {
        // Born 1961: formative window 1974..=1986, before any launch.
        let timeline = LifeTimeline::for_age(65, 2026);
        assert_eq!(timeline.era, DigitalEra::PreDigital);
        assert!(timeline.formative_platforms.is_empty());
    }
}
