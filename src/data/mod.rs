use crate::table::{load, Dataset, LoadError};
use std::path::Path;
use std::sync::OnceLock;

/// The 16 personality types, in the fixed selector order
pub const MBTI_TYPES: [&str; 16] = [
    "INTJ", "INTP", "ENTJ", "ENTP",
    "INFJ", "INFP", "ENFJ", "ENFP",
    "ISTJ", "ISFJ", "ESTJ", "ESFJ",
    "ISTP", "ISFP", "ESTP", "ESFP",
];

/// A prepared recommendation list: two books and two films for one type
pub struct Recommendation {
    pub mbti: &'static str,
    pub books: [&'static str; 2],
    pub films: [&'static str; 2],
}

/// Types without an entry here show the "still being prepared" notice
pub const RECOMMENDATIONS: [Recommendation; 5] = [
    Recommendation {
        mbti: "INTJ",
        books: [
            "Sparks of Genius - Robert & Michele Root-Bernstein",
            "The Selfish Gene - Richard Dawkins",
        ],
        films: ["Interstellar", "Inception"],
    },
    Recommendation {
        mbti: "INFP",
        books: [
            "Little Women - Louisa May Alcott",
            "The Kite Runner - Khaled Hosseini",
        ],
        films: ["WALL-E", "About Time"],
    },
    Recommendation {
        mbti: "ENFP",
        books: [
            "The Man Who Crossed the Rainbow - Hiroshi Mori",
            "The Uncanny Convenience Store - Kim Ho-yeon",
        ],
        films: ["Inside Out", "La La Land"],
    },
    Recommendation {
        mbti: "ISTJ",
        books: [
            "The Miracles of the Namiya General Store - Keigo Higashino",
            "Seven Years of Darkness - Jeong You-jeong",
        ],
        films: ["The King", "Joker"],
    },
    Recommendation {
        mbti: "ESFP",
        books: [
            "Atomic Habits - James Clear",
            "Trend Korea 2025 - Kim Nan-do",
        ],
        films: ["The Greatest Showman", "The Intern"],
    },
];

/// Lookup by type code; `None` means no list is prepared yet
pub fn recommendation_for(mbti: &str) -> Option<&'static Recommendation> {
    RECOMMENDATIONS.iter().find(|r| r.mbti == mbti)
}

/// A fixed geographic marker
pub struct Spot {
    pub name: &'static str,
    pub lon: f64,
    pub lat: f64,
    pub desc: &'static str,
    pub link: &'static str,
}

/// Top 10 Seoul tourist spots, widely known center coordinates
pub const SPOTS: [Spot; 10] = [
    Spot {
        name: "Gyeongbokgung Palace",
        lon: 126.9770, lat: 37.5796,
        desc: "Main royal palace of the Joseon dynasty; famous for hanbok visits and the changing of the guard.",
        link: "https://english.visitkorea.or.kr",
    },
    Spot {
        name: "Changdeokgung Palace",
        lon: 126.9910, lat: 37.5789,
        desc: "Palace known for its Secret Garden; a UNESCO World Heritage site.",
        link: "https://english.visitkorea.or.kr",
    },
    Spot {
        name: "Bukchon Hanok Village",
        lon: 126.9830, lat: 37.5826,
        desc: "Alleys of traditional hanok houses with plenty of photo spots.",
        link: "https://english.visitkorea.or.kr",
    },
    Spot {
        name: "Insadong",
        lon: 126.9860, lat: 37.5740,
        desc: "Street of traditional crafts, tea houses, and souvenir shopping.",
        link: "https://english.visitkorea.or.kr",
    },
    Spot {
        name: "Myeongdong",
        lon: 126.9853, lat: 37.5609,
        desc: "Shopping and street-food hub, popular for cosmetics.",
        link: "https://english.visitkorea.or.kr",
    },
    Spot {
        name: "N Seoul Tower / Namsan",
        lon: 126.9882, lat: 37.5512,
        desc: "City viewpoint famous for its night views and love locks.",
        link: "https://en.wikipedia.org/wiki/N_Seoul_Tower",
    },
    Spot {
        name: "Hongdae",
        lon: 126.9237, lat: 37.5551,
        desc: "Youth district full of clubs, cafes, and street performances.",
        link: "https://english.visitkorea.or.kr",
    },
    Spot {
        name: "Dongdaemun Design Plaza",
        lon: 127.0090, lat: 37.5663,
        desc: "Futuristic landmark surrounded by night markets and fashion malls.",
        link: "https://english.visitkorea.or.kr",
    },
    Spot {
        name: "Gwangjang Market",
        lon: 126.9970, lat: 37.5704,
        desc: "Traditional market famous for Korean street food like bindaetteok.",
        link: "https://english.visitkorea.or.kr",
    },
    Spot {
        name: "Lotte World Tower & Mall",
        lon: 127.1025, lat: 37.5131,
        desc: "Skyscraper observation deck, mall, and indoor theme park.",
        link: "https://english.visitkorea.or.kr",
    },
];

/// Simplified Han river course through the city, west to east,
/// drawn under the markers for orientation
pub const HAN_RIVER: [(f64, f64); 12] = [
    (126.853, 37.583),
    (126.875, 37.560),
    (126.896, 37.546),
    (126.920, 37.536),
    (126.945, 37.527),
    (126.965, 37.515),
    (126.990, 37.510),
    (127.012, 37.517),
    (127.040, 37.528),
    (127.068, 37.528),
    (127.089, 37.520),
    (127.110, 37.518),
];

pub const COUNTRY_TYPES_PATH: &str = "data/country_types.csv";
pub const MENU_PATH: &str = "data/fastfood_menu.csv";

/// Nutrition columns coerced to numbers at load time; anything that fails
/// to parse loads as missing and drops out of ranking
pub const MENU_NUMERIC: [&str; 11] = [
    "Calories",
    "Calories from Fat",
    "Total Fat (g)",
    "Saturated Fat (g)",
    "Trans Fat (g)",
    "Cholesterol (mg)",
    "Sodium (mg)",
    "Carbs (g)",
    "Fiber (g)",
    "Sugars (g)",
    "Protein (g)",
];

static COUNTRY_TYPES: OnceLock<Result<Dataset, LoadError>> = OnceLock::new();
static MENU: OnceLock<Result<Dataset, LoadError>> = OnceLock::new();

/// Country type-share table, melted to long form (`Country`, `Type`,
/// `Share`). Loaded on first access, immutable for the process lifetime.
pub fn country_types_long() -> &'static Result<Dataset, LoadError> {
    COUNTRY_TYPES.get_or_init(|| {
        let mut required = vec!["Country"];
        required.extend(MBTI_TYPES);
        let wide = load(Path::new(COUNTRY_TYPES_PATH), &MBTI_TYPES, &required)?;
        Ok(wide.melt("Country", "Type", "Share")?)
    })
}

/// Fast-food nutrition table. Loaded on first access, immutable for the
/// process lifetime.
pub fn menu() -> &'static Result<Dataset, LoadError> {
    MENU.get_or_init(|| load(Path::new(MENU_PATH), &MENU_NUMERIC, &["Company", "Item"]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_recommended_type_is_a_known_type() {
        for rec in &RECOMMENDATIONS {
            assert!(MBTI_TYPES.contains(&rec.mbti));
        }
    }

    #[test]
    fn test_unprepared_type_has_no_list() {
        assert!(recommendation_for("INTP").is_none());
        assert!(recommendation_for("INTJ").is_some());
    }

    #[test]
    fn test_spots_are_inside_the_city_window() {
        for spot in &SPOTS {
            assert!(spot.lon > 126.8 && spot.lon < 127.2, "{}", spot.name);
            assert!(spot.lat > 37.4 && spot.lat < 37.7, "{}", spot.name);
        }
    }
}
