//! Search query generation for footprint research.

use renexus_types::guardian::UserDetails;

/// Platforms checked with site-scoped searches.
pub const SOCIAL_PLATFORMS: [&str; 9] = [
    "facebook.com",
    "instagram.com",
    "twitter.com",
    "linkedin.com",
    "tiktok.com",
    "snapchat.com",
    "youtube.com",
    "reddit.com",
    "pinterest.com",
];

/// People-search sites that aggregate and resell personal data.
pub const DATA_BROKER_SITES: [&str; 6] = [
    "whitepages.com",
    "spokeo.com",
    "peoplefinder.com",
    "intelius.com",
    "beenverified.com",
    "truthfinder.com",
];

/// Builds the search queries used to map someone's public footprint.
///
/// Everything keys off the name; without one there is nothing to search
/// for and the result is empty. Age is turned into a birth year using
/// `current_year` so queries stay stable within a calendar year.
pub fn build_queries(details: &UserDetails, current_year: i32) -> Vec<String> {
    let name = details.name.trim();
    if name.is_empty() {
        return Vec::new();
    }

    let mut queries = Vec::new();
    queries.push(format!("\"{name}\""));
    queries.push(name.to_string());

    if let Some(location) = details.location.as_deref().filter(|l| !l.trim().is_empty()) {
        queries.push(format!("\"{name}\" {location}"));
        queries.push(format!("{name} {location}"));
    }

    if let Some(age) = details.age {
        let birth_year = current_year - i32::from(age);
        queries.push(format!("\"{name}\" {birth_year}"));
        queries.push(format!("{name} born {birth_year}"));
    }

    for platform in SOCIAL_PLATFORMS {
        queries.push(format!("site:{platform} \"{name}\""));
        queries.push(format!("site:{platform} {name}"));
    }

    queries.push(format!("\"{name}\" linkedin"));
    queries.push(format!("\"{name}\" resume"));
    queries.push(format!("\"{name}\" CV"));

    queries.push(format!("\"{name}\" university"));
    queries.push(format!("\"{name}\" college"));
    queries.push(format!("\"{name}\" school"));

    for broker in DATA_BROKER_SITES {
        queries.push(format!("site:{broker} \"{name}\""));
    }

    queries
}
