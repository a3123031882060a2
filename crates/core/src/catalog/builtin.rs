use super::{
    AudienceProfile, Catalog, MarketProfile, Opportunity, ProjectArchetype, Region, SubRegion,
};
use crate::domain::RiskLevel;

pub(super) fn catalog() -> Catalog {
    Catalog {
        regions: regions(),
        archetypes: archetypes(),
        audiences: audiences(),
        opportunities: opportunities(),
    }
}

fn region(id: &str, name: &str, population: u64, visitors: u64, sectors: &[&str]) -> Region {
    Region {
        id: id.to_string(),
        name: name.to_string(),
        population,
        visitors,
        subregions: Vec::new(),
        market: MarketProfile {
            description: String::new(),
            key_sectors: sectors.iter().map(|s| s.to_string()).collect(),
        },
        advisories: Vec::new(),
    }
}

fn subregion(id: &str, name: &str, population: u64, visitors: u64) -> SubRegion {
    SubRegion {
        id: id.to_string(),
        name: name.to_string(),
        population,
        visitors,
    }
}

fn regions() -> Vec<Region> {
    let mut salalah = region(
        "salalah",
        "Salalah",
        93_000,
        67_000,
        &["tourism", "food_service"],
    );
    salalah.market.description = "Khareef monsoon destination on the Dhofar coast".to_string();
    salalah.advisories.push(
        "Salalah draws a strategic visitor volume during the Khareef season (June to September); \
         size capacity for the peak."
            .to_string(),
    );

    let mut muscat = region(
        "muscat",
        "Muscat",
        1_300_000,
        210_000,
        &["real_estate", "technology", "retail", "food_service"],
    );
    muscat.market.description =
        "Capital governorate, year-round business and leisure demand".to_string();

    let mut nizwa = region("nizwa", "Nizwa", 72_000, 18_000, &["tourism", "agriculture"]);
    nizwa.market.description = "Heritage town and gateway to the Hajar mountains".to_string();

    let mut sur = region("sur", "Sur", 120_000, 15_000, &["logistics", "tourism"]);
    sur.market.description = "Coastal trade hub near the turtle reserves".to_string();

    let mut dhofar = Region::from_subregions(
        "dhofar",
        "Dhofar Governorate",
        vec![
            subregion("salalah", "Salalah", 93_000, 67_000),
            subregion("taqah", "Taqah", 28_000, 9_000),
            subregion("mirbat", "Mirbat", 19_000, 6_500),
        ],
    );
    dhofar.market = MarketProfile {
        description: "Southern governorate, seasonal tourism and fisheries".to_string(),
        key_sectors: vec!["tourism".to_string(), "agriculture".to_string()],
    };
    dhofar.advisories.push(
        "Dhofar figures aggregate Salalah, Taqah and Mirbat; demand is concentrated around Salalah."
            .to_string(),
    );

    vec![salalah, muscat, nizwa, sur, dhofar]
}

#[allow(clippy::too_many_arguments)]
fn archetype(
    id: &str,
    name: &str,
    visitor_weight: f64,
    local_weight: f64,
    avg_roi: f64,
    seasonality_risk: f64,
    permits_required: u32,
    avg_approval_days: u32,
    default_operating_cost: f64,
) -> ProjectArchetype {
    ProjectArchetype {
        id: id.to_string(),
        name: name.to_string(),
        visitor_weight,
        local_weight,
        avg_roi,
        seasonality_risk,
        permits_required,
        avg_approval_days,
        default_operating_cost,
    }
}

fn archetypes() -> Vec<ProjectArchetype> {
    vec![
        archetype("hotels", "Hotels & resorts", 0.8, 0.2, 0.18, 0.3, 4, 21, 15_000.0),
        archetype("restaurants", "Restaurants", 0.5, 0.6, 0.15, 0.2, 3, 14, 6_000.0),
        archetype("cafes", "Cafés", 0.4, 0.7, 0.12, 0.15, 2, 10, 2_500.0),
        archetype("tour_operators", "Tour operators", 0.9, 0.1, 0.22, 0.45, 3, 30, 4_000.0),
        archetype("eco_lodges", "Eco-lodges", 0.85, 0.15, 0.2, 0.4, 5, 45, 7_000.0),
        archetype("retail", "Retail stores", 0.3, 0.8, 0.1, 0.1, 2, 7, 3_500.0),
    ]
}

fn audience(id: &str, name: &str, weight: f64, seasonality: f64) -> AudienceProfile {
    AudienceProfile {
        id: id.to_string(),
        name: name.to_string(),
        weight,
        seasonality,
    }
}

fn audiences() -> Vec<AudienceProfile> {
    vec![
        audience("tourists", "Tourists", 1.0, 0.8),
        audience("locals", "Local residents", 0.9, 0.1),
        audience("families", "Families", 0.7, 0.5),
        audience("business", "Business travellers", 0.4, 0.2),
        audience("youth", "Students & youth", 0.5, 0.3),
    ]
}

fn opportunity(
    id: &str,
    sector: &str,
    title: &str,
    region_id: &str,
    expected_roi: f64,
    risk_level: RiskLevel,
    min_investment: f64,
) -> Opportunity {
    Opportunity {
        id: id.to_string(),
        sector: sector.to_string(),
        title: title.to_string(),
        region_id: Some(region_id.to_string()),
        expected_roi,
        risk_level,
        min_investment,
    }
}

fn opportunities() -> Vec<Opportunity> {
    use RiskLevel::{High, Low, Medium};
    vec![
        opportunity(
            "tour-khareef-camp",
            "tourism",
            "Khareef glamping site",
            "salalah",
            0.22,
            High,
            80_000.0,
        ),
        opportunity(
            "tour-heritage-inn",
            "tourism",
            "Heritage guesthouse",
            "nizwa",
            0.16,
            Medium,
            60_000.0,
        ),
        opportunity(
            "food-seafood-grill",
            "food_service",
            "Seafood grill on the corniche",
            "sur",
            0.17,
            Medium,
            40_000.0,
        ),
        opportunity(
            "food-cloud-kitchen",
            "food_service",
            "Cloud kitchen",
            "muscat",
            0.13,
            Low,
            25_000.0,
        ),
        opportunity(
            "re-serviced-apartments",
            "real_estate",
            "Serviced apartments",
            "muscat",
            0.12,
            Low,
            150_000.0,
        ),
        opportunity(
            "re-student-housing",
            "real_estate",
            "Student housing block",
            "nizwa",
            0.1,
            Low,
            120_000.0,
        ),
        opportunity(
            "tech-booking-platform",
            "technology",
            "Local booking platform",
            "muscat",
            0.28,
            High,
            50_000.0,
        ),
        opportunity(
            "tech-fintech-kiosk",
            "technology",
            "Payments kiosk network",
            "muscat",
            0.19,
            Medium,
            35_000.0,
        ),
        opportunity(
            "retail-souq-outlet",
            "retail",
            "Souq craft outlet",
            "nizwa",
            0.11,
            Low,
            20_000.0,
        ),
        opportunity(
            "log-cold-storage",
            "logistics",
            "Cold storage for fisheries",
            "sur",
            0.14,
            Medium,
            90_000.0,
        ),
        opportunity(
            "agri-frankincense",
            "agriculture",
            "Frankincense processing",
            "dhofar",
            0.15,
            Medium,
            45_000.0,
        ),
        opportunity(
            "agri-date-packing",
            "agriculture",
            "Date packing unit",
            "nizwa",
            0.09,
            Low,
            30_000.0,
        ),
        opportunity(
            "energy-solar-rooftop",
            "renewable_energy",
            "Rooftop solar leasing",
            "muscat",
            0.13,
            Low,
            70_000.0,
        ),
    ]
}
