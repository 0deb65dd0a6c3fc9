//! Place-name and street-type vocabularies
//!
//! Entries are regex fragments (multi-word names use `\s+`) and are joined into
//! alternations by the catalog.

/// Street-type words recognised when deciding whether text is an address
pub const STREET_TYPES: &[&str] = &[
    "Street", "Avenue", "Road", "Lane", "Drive", "Boulevard", "Blvd", "Way", "Plaza", "Square",
    "Court", "Terrace", "Place", "Circle", "Alley", "Row", "Highway", "Hwy", "Parkway", "Path",
    "Trail", "Crescent", "Rue", "Strasse", "Straße", "Calle", "Via", "Viale", "Avenida", "Carrer",
    "Straat", "Gasse", "Weg", "Camino", "Ulica", "Utca", "Prospekt", "Dori", "Jalan", "Marg", "Dao",
    "Jie", "Lu",
];

/// Street-type fragments matched anywhere inside a candidate, without word boundaries
pub const INTERNATIONAL_STREET_FRAGMENTS: &[&str] = &[
    "street", "avenue", "road", "lane", "drive", "boulevard", "blvd", "way", "plaza", "square",
    "court", "terrace", "place", "circle", "alley", "row", "highway", "parkway", "path", "trail",
    "crescent", "rue", "strasse", "straße", "calle", "via", "viale", "avenida", "carrer", "straat",
    "gasse", "weg", "camino", "ulica", "utca", "prospekt", "dori", "jalan", "marg", "dao", "jie",
    "lu",
];

/// Street types (with abbreviations) that terminate the street part of a full address
pub const ADDRESS_STREET_TYPES: &[&str] = &[
    "Street", "St", "Avenue", "Ave", "Road", "Rd", "Drive", "Dr", "Lane", "Ln", "Place", "Pl",
    "Boulevard", "Blvd", "Way", "Plaza", "Square", "Sq", "Court", "Ct", "Terrace", "Ter", "Circle",
    "Cir", "Alley", "Row", "Highway", "Hwy", "Parkway", "Pkwy", "Path", "Trail", "Tr", "Crescent",
    "Cres", "Rue", "Strasse", "Straße", "Calle", "Via", "Viale", "Avenida", "Carrer", "Straat",
    "Gasse", "Weg", "Camino", "Ulica", "Utca", "Prospekt", "Dori", "Jalan", "Marg", "Dao", "Jie",
    "Lu", "út", "de la", "del", "di", "van", "von",
];

/// Street types accepted by the street + country form
pub const COUNTRY_ADDRESS_STREET_TYPES: &[&str] = &[
    "Road", "Rd", "Street", "St", "Avenue", "Ave", "Boulevard", "Blvd", "Drive", "Dr",
];

/// Street types accepted by the street + city + country form
pub const CITY_COUNTRY_ADDRESS_STREET_TYPES: &[&str] = &["Rue", "Via", "Road", "Street", "Avenue"];

/// Street types accepted after a label such as "HQ:"
pub const LABELED_ADDRESS_STREET_TYPES: &[&str] = &[
    "Road", "Rd", "Street", "St", "Avenue", "Ave", "Boulevard", "Blvd", "Drive", "Dr", "Lane",
    "Ln", "Place", "Pl", "Rue", "Via", "Viale", "Strasse", "Straße", "Calle", "Avenida",
];

/// Street types recognised after a contextual phrase such as "lives at"
pub const CONTEXT_ADDRESS_STREET_TYPES: &[&str] = &[
    "Street", "St", "Avenue", "Ave", "Road", "Rd", "Drive", "Dr", "Lane", "Ln", "Place", "Pl",
    "Boulevard", "Blvd", "Way",
];

/// Phrases that introduce an address in running text
pub const ADDRESS_CONTEXT_PHRASES: &[&str] = &[
    "lives at",
    "located at",
    "resides at",
    "found at",
    "situated at",
    "at address",
    "address is",
    "at location",
    "based at",
];

pub const COUNTRY_NAMES: &[&str] = &[
    "Afghanistan", "Albania", "Algeria", "Andorra", "Angola", "Argentina", "Armenia", "Australia",
    "Austria", "Azerbaijan", "Bahamas", "Bahrain", "Bangladesh", "Barbados", "Belarus", "Belgium",
    "Belize", "Benin", "Bhutan", "Bolivia", "Bosnia", "Brazil", "Brunei", "Bulgaria",
    r"Burkina\s+Faso", "Burundi", "Cambodia", "Cameroon", "Canada", "Chad", "Chile", "China",
    "Colombia", "Comoros", "Congo", r"Costa\s+Rica", "Croatia", "Cuba", "Cyprus", "Czech",
    "Denmark", "Djibouti", "Dominica", r"Dominican\s+Republic", "Ecuador", "Egypt",
    r"El\s+Salvador", "Eritrea", "Estonia", "Eswatini", "Ethiopia", "Fiji", "Finland", "France",
    "Gabon", "Gambia", "Georgia", "Germany", "Ghana", "Greece", "Grenada", "Guatemala", "Guinea",
    "Guyana", "Haiti", "Honduras", "Hungary", "Iceland", "India", "Indonesia", "Iran", "Iraq",
    "Ireland", "Israel", "Italy", "Jamaica", "Japan", "Jordan", "Kazakhstan", "Kenya", "Kiribati",
    "Korea", "Kuwait", "Kyrgyzstan", "Laos", "Latvia", "Lebanon", "Lesotho", "Liberia", "Libya",
    "Liechtenstein", "Lithuania", "Luxembourg", "Madagascar", "Malawi", "Malaysia", "Maldives",
    "Mali", "Malta", "Mauritania", "Mauritius", "Mexico", "Micronesia", "Moldova", "Monaco",
    "Mongolia", "Montenegro", "Morocco", "Mozambique", "Myanmar", "Namibia", "Nauru", "Nepal",
    "Netherlands", r"New\s+Zealand", "Nicaragua", "Niger", "Nigeria", "Norway", "Oman", "Pakistan",
    "Palau", "Panama", r"Papua\s+New\s+Guinea", "Paraguay", "Peru", "Philippines", "Poland",
    "Portugal", "Qatar", "Romania", "Russia", "Rwanda", "Samoa", r"San\s+Marino",
    r"Saudi\s+Arabia", "Senegal", "Serbia", "Seychelles", r"Sierra\s+Leone", "Singapore",
    "Slovakia", "Slovenia", r"Solomon\s+Islands", "Somalia", r"South\s+Africa", r"South\s+Sudan",
    "Spain", r"Sri\s+Lanka", "Sudan", "Suriname", "Sweden", "Switzerland", "Syria", "Taiwan",
    "Tajikistan", "Tanzania", "Thailand", "Togo", "Tonga", r"Trinidad\s+and\s+Tobago", "Tunisia",
    "Turkey", "Turkmenistan", "Tuvalu", "Uganda", "Ukraine", r"United\s+Arab\s+Emirates", "UAE",
    r"United\s+Kingdom", "UK", r"Great\s+Britain", "Britain", "England", "Scotland", "Wales",
    r"United\s+States", "USA", r"U\.S\.A\.", r"U\.S\.", "US", "America", "Uruguay", "Uzbekistan",
    "Vanuatu", "Vatican", "Venezuela", "Vietnam", "Yemen", "Zambia", "Zimbabwe",
];

pub const CITY_NAMES: &[&str] = &[
    r"New\s+York", r"Los\s+Angeles", "Chicago", "Houston", "Phoenix", "Philadelphia",
    r"San\s+Antonio", r"San\s+Diego", "Dallas", r"San\s+Jose", "Austin", "Jacksonville",
    r"Fort\s+Worth", "Columbus", "Charlotte", "Indianapolis", r"San\s+Francisco", "Seattle",
    "Denver", "Washington", "Boston", "London", "Manchester", "Birmingham", "Liverpool", "Glasgow",
    "Edinburgh", "Paris", "Marseille", "Lyon", "Berlin", "Munich", "Hamburg", "Frankfurt", "Tokyo",
    "Osaka", "Kyoto", "Seoul", "Mumbai", "Delhi", "Hyderabad", "Bangkok", "Beijing", "Shanghai",
    r"Hong\s+Kong", "Singapore", "Toronto", "Vancouver", "Montreal", "Sydney", "Melbourne",
    "Brisbane", "Madrid", "Barcelona", "Rome", "Milan", "Amsterdam", "Brussels", "Vienna", "Prague",
    "Moscow", r"St\.\s+Petersburg", "Dubai", r"Abu\s+Dhabi", "Riyadh", "Cairo", "Nairobi", "Lagos",
    "Johannesburg", r"Cape\s+Town", "Casablanca", "Istanbul", "Ankara", "Tehran", "Baghdad",
    "Karachi", "Lahore", "Dhaka", "Jakarta", "Manila", "Auckland",
];

/// ISO-3166 alpha-2 codes (plus "USA")
pub const ISO_COUNTRY_CODES: &[&str] = &[
    "AF", "AX", "AL", "DZ", "AS", "AD", "AO", "AI", "AQ", "AG", "AR", "AM", "AW", "AU", "AT", "AZ",
    "BS", "BH", "BD", "BB", "BY", "BE", "BZ", "BJ", "BM", "BT", "BO", "BQ", "BA", "BW", "BV", "BR",
    "IO", "BN", "BG", "BF", "BI", "KH", "CM", "CA", "CV", "KY", "CF", "TD", "CL", "CN", "CX", "CC",
    "CO", "KM", "CG", "CD", "CK", "CR", "CI", "HR", "CU", "CW", "CY", "CZ", "DK", "DJ", "DM", "DO",
    "EC", "EG", "SV", "GQ", "ER", "EE", "ET", "FK", "FO", "FJ", "FI", "FR", "GF", "PF", "TF", "GA",
    "GM", "GE", "DE", "GH", "GI", "GR", "GL", "GD", "GP", "GU", "GT", "GG", "GN", "GW", "GY", "HT",
    "HM", "VA", "HN", "HK", "HU", "IS", "IN", "ID", "IR", "IQ", "IE", "IM", "IL", "IT", "JM", "JP",
    "JE", "JO", "KZ", "KE", "KI", "KP", "KR", "KW", "KG", "LA", "LV", "LB", "LS", "LR", "LY", "LI",
    "LT", "LU", "MO", "MK", "MG", "MW", "MY", "MV", "ML", "MT", "MH", "MQ", "MR", "MU", "YT", "MX",
    "FM", "MD", "MC", "MN", "ME", "MS", "MA", "MZ", "MM", "NA", "NR", "NP", "NL", "NC", "NZ", "NI",
    "NE", "NG", "NU", "NF", "MP", "NO", "OM", "PK", "PW", "PS", "PA", "PG", "PY", "PE", "PH", "PN",
    "PL", "PT", "PR", "QA", "RE", "RO", "RU", "RW", "BL", "SH", "KN", "LC", "MF", "PM", "VC", "WS",
    "SM", "ST", "SA", "SN", "RS", "SC", "SL", "SG", "SX", "SK", "SI", "SB", "SO", "ZA", "GS", "SS",
    "ES", "LK", "SD", "SR", "SJ", "SZ", "SE", "CH", "SY", "TW", "TJ", "TZ", "TH", "TL", "TG", "TK",
    "TO", "TT", "TN", "TR", "TM", "TC", "TV", "UG", "UA", "AE", "GB", "US", "USA", "UM", "UY", "UZ",
    "VU", "VE", "VN", "VG", "VI", "WF", "EH", "YE", "ZM", "ZW",
];

/// Join fragments into a regex alternation
pub fn alternation(items: &[&str]) -> String {
    items.join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternation() {
        assert_eq!(alternation(&["Rue", "Via"]), "Rue|Via");
    }

    #[test]
    fn test_vocabularies_are_populated() {
        assert!(STREET_TYPES.contains(&"Rue"));
        assert!(COUNTRY_NAMES.contains(&"France"));
        assert!(CITY_NAMES.contains(&"Paris"));
        assert!(ISO_COUNTRY_CODES.contains(&"GB"));
        assert!(INTERNATIONAL_STREET_FRAGMENTS
            .iter()
            .all(|f| STREET_TYPES.iter().any(|s| s.eq_ignore_ascii_case(f) || s.to_lowercase() == *f)));
    }
}
