//! Static collaborators of the presentation layer: the fixed state
//! enumeration, the informational tip strings, and the form defaults.

/// The 50 US state names, alphabetical. `state` is carried through the
/// computation unused, reserved for jurisdiction-specific logic.
pub const STATES: [&str; 50] = [
    "Alabama",
    "Alaska",
    "Arizona",
    "Arkansas",
    "California",
    "Colorado",
    "Connecticut",
    "Delaware",
    "Florida",
    "Georgia",
    "Hawaii",
    "Idaho",
    "Illinois",
    "Indiana",
    "Iowa",
    "Kansas",
    "Kentucky",
    "Louisiana",
    "Maine",
    "Maryland",
    "Massachusetts",
    "Michigan",
    "Minnesota",
    "Mississippi",
    "Missouri",
    "Montana",
    "Nebraska",
    "Nevada",
    "New Hampshire",
    "New Jersey",
    "New Mexico",
    "New York",
    "North Carolina",
    "North Dakota",
    "Ohio",
    "Oklahoma",
    "Oregon",
    "Pennsylvania",
    "Rhode Island",
    "South Carolina",
    "South Dakota",
    "Tennessee",
    "Texas",
    "Utah",
    "Vermont",
    "Virginia",
    "Washington",
    "West Virginia",
    "Wisconsin",
    "Wyoming",
];

pub const RENT_TIPS: [&str; 4] = [
    "The 30% rule suggests rent should not exceed 30% of gross income",
    "Some states and cities have rent control or stabilization laws",
    "Review your lease terms for allowable increase caps",
    "Negotiate with your landlord before accepting increases",
];

pub const DISCLAIMER: &str = "This calculator provides estimates of rent increase impacts based on \
the values entered. Actual rent increases depend on lease terms, local laws, and landlord \
policies. The figures shown are estimates only and do not constitute legal advice. Rent control \
and stabilization laws vary by location. Consult local tenant rights organizations or a legal \
professional for guidance specific to your situation.";

/// Initial form values.
pub const DEFAULT_RENT: &str = "1800";
pub const DEFAULT_INCREASE: &str = "5";
pub const DEFAULT_STATE: &str = "California";
pub const DEFAULT_INCOME: &str = "6000";
