// File: ./src/season.rs
// Static, decorative planning notes. Not derived from the event list.

pub struct Season {
    pub name: &'static str,
    pub current: bool,
    pub notes: &'static [&'static str],
}

impl Season {
    pub fn heading(&self) -> String {
        if self.current {
            format!("{} (Current Season)", self.name)
        } else {
            self.name.to_string()
        }
    }
}

pub const OVERVIEW: [Season; 3] = [
    Season {
        name: "Spring",
        current: true,
        notes: &[
            "Complete corn planting by May 10",
            "Initial fertilizer application",
            "Set up irrigation systems",
        ],
    },
    Season {
        name: "Summer",
        current: false,
        notes: &[
            "Regular irrigation monitoring",
            "Secondary fertilizer application mid-July",
            "Pest monitoring and control as needed",
        ],
    },
    Season {
        name: "Fall",
        current: false,
        notes: &[
            "Harvest corn (expected: late September)",
            "Soil testing and amendments",
            "Plant cover crops",
        ],
    },
];
