//! Embedded ISO 3166-1 reference table with each country's continent code.
//!
//! Continent codes are the usual two-letter ones (`AF`, `AN`, `AS`, `EU`,
//! `NA`, `OC`, `SA`). Territories that straddle several continents carry an
//! empty code and cannot be classified.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryRecord {
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    /// ISO 3166-1 short name.
    pub name: &'static str,
    /// Two-letter continent code, empty when the territory has none.
    pub continent: &'static str,
    /// Official and colloquial names accepted by [`lookup_country`].
    pub aliases: &'static [&'static str],
}

const fn country(
    alpha2: &'static str,
    alpha3: &'static str,
    name: &'static str,
    continent: &'static str,
    aliases: &'static [&'static str],
) -> CountryRecord {
    CountryRecord {
        alpha2,
        alpha3,
        name,
        continent,
        aliases,
    }
}

pub const COUNTRIES: &[CountryRecord] = &[
    country("AF", "AFG", "Afghanistan", "AS", &["Islamic Republic of Afghanistan"]),
    country("AX", "ALA", "Åland Islands", "EU", &["Aland Islands", "Åland"]),
    country("AL", "ALB", "Albania", "EU", &["Republic of Albania"]),
    country("DZ", "DZA", "Algeria", "AF", &["People's Democratic Republic of Algeria"]),
    country("AS", "ASM", "American Samoa", "OC", &[]),
    country("AD", "AND", "Andorra", "EU", &["Principality of Andorra"]),
    country("AO", "AGO", "Angola", "AF", &["Republic of Angola"]),
    country("AI", "AIA", "Anguilla", "NA", &[]),
    country("AQ", "ATA", "Antarctica", "AN", &[]),
    country("AG", "ATG", "Antigua and Barbuda", "NA", &[]),
    country("AR", "ARG", "Argentina", "SA", &["Argentine Republic"]),
    country("AM", "ARM", "Armenia", "AS", &["Republic of Armenia"]),
    country("AW", "ABW", "Aruba", "NA", &[]),
    country("AU", "AUS", "Australia", "OC", &["Commonwealth of Australia"]),
    country("AT", "AUT", "Austria", "EU", &["Republic of Austria"]),
    country("AZ", "AZE", "Azerbaijan", "AS", &["Republic of Azerbaijan"]),
    country("BS", "BHS", "Bahamas", "NA", &["The Bahamas", "Commonwealth of the Bahamas"]),
    country("BH", "BHR", "Bahrain", "AS", &["Kingdom of Bahrain"]),
    country("BD", "BGD", "Bangladesh", "AS", &["People's Republic of Bangladesh"]),
    country("BB", "BRB", "Barbados", "NA", &[]),
    country("BY", "BLR", "Belarus", "EU", &["Republic of Belarus"]),
    country("BE", "BEL", "Belgium", "EU", &["Kingdom of Belgium"]),
    country("BZ", "BLZ", "Belize", "NA", &[]),
    country("BJ", "BEN", "Benin", "AF", &["Republic of Benin"]),
    country("BM", "BMU", "Bermuda", "NA", &[]),
    country("BT", "BTN", "Bhutan", "AS", &["Kingdom of Bhutan"]),
    country("BO", "BOL", "Bolivia, Plurinational State of", "SA", &["Bolivia", "Plurinational State of Bolivia"]),
    country("BQ", "BES", "Bonaire, Sint Eustatius and Saba", "NA", &["Caribbean Netherlands"]),
    country("BA", "BIH", "Bosnia and Herzegovina", "EU", &["Bosnia", "Republic of Bosnia and Herzegovina"]),
    country("BW", "BWA", "Botswana", "AF", &["Republic of Botswana"]),
    country("BV", "BVT", "Bouvet Island", "AN", &[]),
    country("BR", "BRA", "Brazil", "SA", &["Federative Republic of Brazil", "Brasil"]),
    country("IO", "IOT", "British Indian Ocean Territory", "AS", &[]),
    country("BN", "BRN", "Brunei Darussalam", "AS", &["Brunei"]),
    country("BG", "BGR", "Bulgaria", "EU", &["Republic of Bulgaria"]),
    country("BF", "BFA", "Burkina Faso", "AF", &[]),
    country("BI", "BDI", "Burundi", "AF", &["Republic of Burundi"]),
    country("CV", "CPV", "Cabo Verde", "AF", &["Cape Verde", "Republic of Cabo Verde"]),
    country("KH", "KHM", "Cambodia", "AS", &["Kingdom of Cambodia"]),
    country("CM", "CMR", "Cameroon", "AF", &["Republic of Cameroon"]),
    country("CA", "CAN", "Canada", "NA", &[]),
    country("KY", "CYM", "Cayman Islands", "NA", &[]),
    country("CF", "CAF", "Central African Republic", "AF", &[]),
    country("TD", "TCD", "Chad", "AF", &["Republic of Chad"]),
    country("CL", "CHL", "Chile", "SA", &["Republic of Chile"]),
    country("CN", "CHN", "China", "AS", &["People's Republic of China", "PRC"]),
    country("CX", "CXR", "Christmas Island", "AS", &[]),
    country("CC", "CCK", "Cocos (Keeling) Islands", "AS", &["Cocos Islands"]),
    country("CO", "COL", "Colombia", "SA", &["Republic of Colombia"]),
    country("KM", "COM", "Comoros", "AF", &["Union of the Comoros"]),
    country("CG", "COG", "Congo", "AF", &["Republic of the Congo", "Congo-Brazzaville"]),
    country("CD", "COD", "Congo, The Democratic Republic of the", "AF", &["Democratic Republic of the Congo", "DR Congo", "Congo-Kinshasa"]),
    country("CK", "COK", "Cook Islands", "OC", &[]),
    country("CR", "CRI", "Costa Rica", "NA", &["Republic of Costa Rica"]),
    country("CI", "CIV", "Côte d'Ivoire", "AF", &["Cote d'Ivoire", "Ivory Coast", "Republic of Côte d'Ivoire"]),
    country("HR", "HRV", "Croatia", "EU", &["Republic of Croatia"]),
    country("CU", "CUB", "Cuba", "NA", &["Republic of Cuba"]),
    country("CW", "CUW", "Curaçao", "NA", &["Curacao"]),
    country("CY", "CYP", "Cyprus", "AS", &["Republic of Cyprus"]),
    country("CZ", "CZE", "Czechia", "EU", &["Czech Republic"]),
    country("DK", "DNK", "Denmark", "EU", &["Kingdom of Denmark"]),
    country("DJ", "DJI", "Djibouti", "AF", &["Republic of Djibouti"]),
    country("DM", "DMA", "Dominica", "NA", &["Commonwealth of Dominica"]),
    country("DO", "DOM", "Dominican Republic", "NA", &[]),
    country("EC", "ECU", "Ecuador", "SA", &["Republic of Ecuador"]),
    country("EG", "EGY", "Egypt", "AF", &["Arab Republic of Egypt"]),
    country("SV", "SLV", "El Salvador", "NA", &["Republic of El Salvador"]),
    country("GQ", "GNQ", "Equatorial Guinea", "AF", &["Republic of Equatorial Guinea"]),
    country("ER", "ERI", "Eritrea", "AF", &["State of Eritrea"]),
    country("EE", "EST", "Estonia", "EU", &["Republic of Estonia"]),
    country("SZ", "SWZ", "Eswatini", "AF", &["Swaziland", "Kingdom of Eswatini"]),
    country("ET", "ETH", "Ethiopia", "AF", &["Federal Democratic Republic of Ethiopia"]),
    country("FK", "FLK", "Falkland Islands (Malvinas)", "SA", &["Falkland Islands"]),
    country("FO", "FRO", "Faroe Islands", "EU", &[]),
    country("FJ", "FJI", "Fiji", "OC", &["Republic of Fiji"]),
    country("FI", "FIN", "Finland", "EU", &["Republic of Finland"]),
    country("FR", "FRA", "France", "EU", &["French Republic"]),
    country("GF", "GUF", "French Guiana", "SA", &[]),
    country("PF", "PYF", "French Polynesia", "OC", &[]),
    country("TF", "ATF", "French Southern Territories", "AN", &[]),
    country("GA", "GAB", "Gabon", "AF", &["Gabonese Republic"]),
    country("GM", "GMB", "Gambia", "AF", &["The Gambia", "Republic of the Gambia"]),
    country("GE", "GEO", "Georgia", "AS", &[]),
    country("DE", "DEU", "Germany", "EU", &["Federal Republic of Germany"]),
    country("GH", "GHA", "Ghana", "AF", &["Republic of Ghana"]),
    country("GI", "GIB", "Gibraltar", "EU", &[]),
    country("GR", "GRC", "Greece", "EU", &["Hellenic Republic"]),
    country("GL", "GRL", "Greenland", "NA", &[]),
    country("GD", "GRD", "Grenada", "NA", &[]),
    country("GP", "GLP", "Guadeloupe", "NA", &[]),
    country("GU", "GUM", "Guam", "OC", &[]),
    country("GT", "GTM", "Guatemala", "NA", &["Republic of Guatemala"]),
    country("GG", "GGY", "Guernsey", "EU", &[]),
    country("GN", "GIN", "Guinea", "AF", &["Republic of Guinea"]),
    country("GW", "GNB", "Guinea-Bissau", "AF", &["Republic of Guinea-Bissau"]),
    country("GY", "GUY", "Guyana", "SA", &["Republic of Guyana"]),
    country("HT", "HTI", "Haiti", "NA", &["Republic of Haiti"]),
    country("HM", "HMD", "Heard Island and McDonald Islands", "AN", &[]),
    country("VA", "VAT", "Holy See (Vatican City State)", "EU", &["Vatican City", "Vatican", "Holy See"]),
    country("HN", "HND", "Honduras", "NA", &["Republic of Honduras"]),
    country("HK", "HKG", "Hong Kong", "AS", &["Hong Kong SAR"]),
    country("HU", "HUN", "Hungary", "EU", &[]),
    country("IS", "ISL", "Iceland", "EU", &["Republic of Iceland"]),
    country("IN", "IND", "India", "AS", &["Republic of India"]),
    country("ID", "IDN", "Indonesia", "AS", &["Republic of Indonesia"]),
    country("IR", "IRN", "Iran, Islamic Republic of", "AS", &["Iran", "Islamic Republic of Iran"]),
    country("IQ", "IRQ", "Iraq", "AS", &["Republic of Iraq"]),
    country("IE", "IRL", "Ireland", "EU", &["Republic of Ireland"]),
    country("IM", "IMN", "Isle of Man", "EU", &[]),
    country("IL", "ISR", "Israel", "AS", &["State of Israel"]),
    country("IT", "ITA", "Italy", "EU", &["Italian Republic", "Italia"]),
    country("JM", "JAM", "Jamaica", "NA", &[]),
    country("JP", "JPN", "Japan", "AS", &[]),
    country("JE", "JEY", "Jersey", "EU", &[]),
    country("JO", "JOR", "Jordan", "AS", &["Hashemite Kingdom of Jordan"]),
    country("KZ", "KAZ", "Kazakhstan", "AS", &["Republic of Kazakhstan"]),
    country("KE", "KEN", "Kenya", "AF", &["Republic of Kenya"]),
    country("KI", "KIR", "Kiribati", "OC", &["Republic of Kiribati"]),
    country("KP", "PRK", "Korea, Democratic People's Republic of", "AS", &["North Korea", "Democratic People's Republic of Korea"]),
    country("KR", "KOR", "Korea, Republic of", "AS", &["South Korea", "Republic of Korea", "Korea"]),
    country("XK", "XKX", "Kosovo", "EU", &["Republic of Kosovo"]),
    country("KW", "KWT", "Kuwait", "AS", &["State of Kuwait"]),
    country("KG", "KGZ", "Kyrgyzstan", "AS", &["Kyrgyz Republic"]),
    country("LA", "LAO", "Lao People's Democratic Republic", "AS", &["Laos"]),
    country("LV", "LVA", "Latvia", "EU", &["Republic of Latvia"]),
    country("LB", "LBN", "Lebanon", "AS", &["Lebanese Republic"]),
    country("LS", "LSO", "Lesotho", "AF", &["Kingdom of Lesotho"]),
    country("LR", "LBR", "Liberia", "AF", &["Republic of Liberia"]),
    country("LY", "LBY", "Libya", "AF", &["State of Libya"]),
    country("LI", "LIE", "Liechtenstein", "EU", &["Principality of Liechtenstein"]),
    country("LT", "LTU", "Lithuania", "EU", &["Republic of Lithuania"]),
    country("LU", "LUX", "Luxembourg", "EU", &["Grand Duchy of Luxembourg"]),
    country("MO", "MAC", "Macao", "AS", &["Macau", "Macao SAR"]),
    country("MG", "MDG", "Madagascar", "AF", &["Republic of Madagascar"]),
    country("MW", "MWI", "Malawi", "AF", &["Republic of Malawi"]),
    country("MY", "MYS", "Malaysia", "AS", &[]),
    country("MV", "MDV", "Maldives", "AS", &["Republic of Maldives"]),
    country("ML", "MLI", "Mali", "AF", &["Republic of Mali"]),
    country("MT", "MLT", "Malta", "EU", &["Republic of Malta"]),
    country("MH", "MHL", "Marshall Islands", "OC", &["Republic of the Marshall Islands"]),
    country("MQ", "MTQ", "Martinique", "NA", &[]),
    country("MR", "MRT", "Mauritania", "AF", &["Islamic Republic of Mauritania"]),
    country("MU", "MUS", "Mauritius", "AF", &["Republic of Mauritius"]),
    country("YT", "MYT", "Mayotte", "AF", &[]),
    country("MX", "MEX", "Mexico", "NA", &["United Mexican States", "México"]),
    country("FM", "FSM", "Micronesia, Federated States of", "OC", &["Micronesia", "Federated States of Micronesia"]),
    country("MD", "MDA", "Moldova, Republic of", "EU", &["Moldova", "Republic of Moldova"]),
    country("MC", "MCO", "Monaco", "EU", &["Principality of Monaco"]),
    country("MN", "MNG", "Mongolia", "AS", &[]),
    country("ME", "MNE", "Montenegro", "EU", &[]),
    country("MS", "MSR", "Montserrat", "NA", &[]),
    country("MA", "MAR", "Morocco", "AF", &["Kingdom of Morocco"]),
    country("MZ", "MOZ", "Mozambique", "AF", &["Republic of Mozambique"]),
    country("MM", "MMR", "Myanmar", "AS", &["Burma", "Republic of the Union of Myanmar"]),
    country("NA", "NAM", "Namibia", "AF", &["Republic of Namibia"]),
    country("NR", "NRU", "Nauru", "OC", &["Republic of Nauru"]),
    country("NP", "NPL", "Nepal", "AS", &["Federal Democratic Republic of Nepal"]),
    country("NL", "NLD", "Netherlands", "EU", &["The Netherlands", "Kingdom of the Netherlands", "Holland"]),
    country("NC", "NCL", "New Caledonia", "OC", &[]),
    country("NZ", "NZL", "New Zealand", "OC", &["Aotearoa"]),
    country("NI", "NIC", "Nicaragua", "NA", &["Republic of Nicaragua"]),
    country("NE", "NER", "Niger", "AF", &["Republic of the Niger"]),
    country("NG", "NGA", "Nigeria", "AF", &["Federal Republic of Nigeria"]),
    country("NU", "NIU", "Niue", "OC", &[]),
    country("NF", "NFK", "Norfolk Island", "OC", &[]),
    country("MK", "MKD", "North Macedonia", "EU", &["Republic of North Macedonia", "Macedonia"]),
    country("MP", "MNP", "Northern Mariana Islands", "OC", &[]),
    country("NO", "NOR", "Norway", "EU", &["Kingdom of Norway"]),
    country("OM", "OMN", "Oman", "AS", &["Sultanate of Oman"]),
    country("PK", "PAK", "Pakistan", "AS", &["Islamic Republic of Pakistan"]),
    country("PW", "PLW", "Palau", "OC", &["Republic of Palau"]),
    country("PS", "PSE", "Palestine, State of", "AS", &["Palestine", "State of Palestine", "Palestinian Territories", "Palestinian Territory"]),
    country("PA", "PAN", "Panama", "NA", &["Republic of Panama"]),
    country("PG", "PNG", "Papua New Guinea", "OC", &["Independent State of Papua New Guinea"]),
    country("PY", "PRY", "Paraguay", "SA", &["Republic of Paraguay"]),
    country("PE", "PER", "Peru", "SA", &["Republic of Peru"]),
    country("PH", "PHL", "Philippines", "AS", &["Republic of the Philippines"]),
    country("PN", "PCN", "Pitcairn", "OC", &["Pitcairn Islands"]),
    country("PL", "POL", "Poland", "EU", &["Republic of Poland", "Polska"]),
    country("PT", "PRT", "Portugal", "EU", &["Portuguese Republic"]),
    country("PR", "PRI", "Puerto Rico", "NA", &[]),
    country("QA", "QAT", "Qatar", "AS", &["State of Qatar"]),
    country("RE", "REU", "Réunion", "AF", &["Reunion"]),
    country("RO", "ROU", "Romania", "EU", &[]),
    country("RU", "RUS", "Russian Federation", "EU", &["Russia"]),
    country("RW", "RWA", "Rwanda", "AF", &["Rwandese Republic"]),
    country("BL", "BLM", "Saint Barthélemy", "NA", &["Saint Barthelemy"]),
    country("SH", "SHN", "Saint Helena, Ascension and Tristan da Cunha", "AF", &["Saint Helena"]),
    country("KN", "KNA", "Saint Kitts and Nevis", "NA", &[]),
    country("LC", "LCA", "Saint Lucia", "NA", &[]),
    country("MF", "MAF", "Saint Martin (French part)", "NA", &["Saint Martin"]),
    country("PM", "SPM", "Saint Pierre and Miquelon", "NA", &[]),
    country("VC", "VCT", "Saint Vincent and the Grenadines", "NA", &[]),
    country("WS", "WSM", "Samoa", "OC", &["Independent State of Samoa"]),
    country("SM", "SMR", "San Marino", "EU", &["Republic of San Marino"]),
    country("ST", "STP", "Sao Tome and Principe", "AF", &["São Tomé and Príncipe"]),
    country("SA", "SAU", "Saudi Arabia", "AS", &["Kingdom of Saudi Arabia"]),
    country("SN", "SEN", "Senegal", "AF", &["Republic of Senegal"]),
    country("RS", "SRB", "Serbia", "EU", &["Republic of Serbia"]),
    country("SC", "SYC", "Seychelles", "AF", &["Republic of Seychelles"]),
    country("SL", "SLE", "Sierra Leone", "AF", &["Republic of Sierra Leone"]),
    country("SG", "SGP", "Singapore", "AS", &["Republic of Singapore"]),
    country("SX", "SXM", "Sint Maarten (Dutch part)", "NA", &["Sint Maarten"]),
    country("SK", "SVK", "Slovakia", "EU", &["Slovak Republic"]),
    country("SI", "SVN", "Slovenia", "EU", &["Republic of Slovenia"]),
    country("SB", "SLB", "Solomon Islands", "OC", &[]),
    country("SO", "SOM", "Somalia", "AF", &["Federal Republic of Somalia"]),
    country("ZA", "ZAF", "South Africa", "AF", &["Republic of South Africa"]),
    country("GS", "SGS", "South Georgia and the South Sandwich Islands", "AN", &[]),
    country("SS", "SSD", "South Sudan", "AF", &["Republic of South Sudan"]),
    country("ES", "ESP", "Spain", "EU", &["Kingdom of Spain", "España"]),
    country("LK", "LKA", "Sri Lanka", "AS", &["Democratic Socialist Republic of Sri Lanka"]),
    country("SD", "SDN", "Sudan", "AF", &["Republic of the Sudan"]),
    country("SR", "SUR", "Suriname", "SA", &["Republic of Suriname"]),
    country("SJ", "SJM", "Svalbard and Jan Mayen", "EU", &[]),
    country("SE", "SWE", "Sweden", "EU", &["Kingdom of Sweden"]),
    country("CH", "CHE", "Switzerland", "EU", &["Swiss Confederation"]),
    country("SY", "SYR", "Syrian Arab Republic", "AS", &["Syria"]),
    country("TW", "TWN", "Taiwan, Province of China", "AS", &["Taiwan"]),
    country("TJ", "TJK", "Tajikistan", "AS", &["Republic of Tajikistan"]),
    country("TZ", "TZA", "Tanzania, United Republic of", "AF", &["Tanzania", "United Republic of Tanzania"]),
    country("TH", "THA", "Thailand", "AS", &["Kingdom of Thailand"]),
    country("TL", "TLS", "Timor-Leste", "AS", &["East Timor", "Democratic Republic of Timor-Leste"]),
    country("TG", "TGO", "Togo", "AF", &["Togolese Republic"]),
    country("TK", "TKL", "Tokelau", "OC", &[]),
    country("TO", "TON", "Tonga", "OC", &["Kingdom of Tonga"]),
    country("TT", "TTO", "Trinidad and Tobago", "NA", &["Republic of Trinidad and Tobago"]),
    country("TN", "TUN", "Tunisia", "AF", &["Republic of Tunisia"]),
    country("TR", "TUR", "Türkiye", "AS", &["Turkey", "Turkiye", "Republic of Türkiye"]),
    country("TM", "TKM", "Turkmenistan", "AS", &[]),
    country("TC", "TCA", "Turks and Caicos Islands", "NA", &[]),
    country("TV", "TUV", "Tuvalu", "OC", &[]),
    country("UG", "UGA", "Uganda", "AF", &["Republic of Uganda"]),
    country("UA", "UKR", "Ukraine", "EU", &[]),
    country("AE", "ARE", "United Arab Emirates", "AS", &["UAE"]),
    country("GB", "GBR", "United Kingdom", "EU", &["United Kingdom of Great Britain and Northern Ireland", "Great Britain", "UK", "Britain"]),
    country("US", "USA", "United States", "NA", &["United States of America", "America"]),
    // Scattered across the Pacific and the Caribbean.
    country("UM", "UMI", "United States Minor Outlying Islands", "", &[]),
    country("UY", "URY", "Uruguay", "SA", &["Eastern Republic of Uruguay"]),
    country("UZ", "UZB", "Uzbekistan", "AS", &["Republic of Uzbekistan"]),
    country("VU", "VUT", "Vanuatu", "OC", &["Republic of Vanuatu"]),
    country("VE", "VEN", "Venezuela, Bolivarian Republic of", "SA", &["Venezuela", "Bolivarian Republic of Venezuela"]),
    country("VN", "VNM", "Viet Nam", "AS", &["Vietnam", "Socialist Republic of Viet Nam"]),
    country("VG", "VGB", "Virgin Islands, British", "NA", &["British Virgin Islands"]),
    country("VI", "VIR", "Virgin Islands, U.S.", "NA", &["United States Virgin Islands", "US Virgin Islands"]),
    country("WF", "WLF", "Wallis and Futuna", "OC", &[]),
    country("EH", "ESH", "Western Sahara", "AF", &[]),
    country("YE", "YEM", "Yemen", "AS", &["Republic of Yemen"]),
    country("ZM", "ZMB", "Zambia", "AF", &["Republic of Zambia"]),
    country("ZW", "ZWE", "Zimbabwe", "AF", &["Republic of Zimbabwe"]),
];

/// Looks up a country by alpha-2 code, alpha-3 code, ISO short name or alias,
/// ignoring case and surrounding whitespace.
///
/// ```
/// use epw_finder::lookup_country;
///
/// assert_eq!(lookup_country("france").map(|c| c.alpha2), Some("FR"));
/// assert_eq!(lookup_country("USA").map(|c| c.alpha2), Some("US"));
/// assert!(lookup_country("Atlantis").is_none());
/// ```
pub fn lookup_country(name: &str) -> Option<&'static CountryRecord> {
    let wanted = name.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }

    COUNTRIES.iter().find(|record| {
        record.alpha2.eq_ignore_ascii_case(&wanted)
            || record.alpha3.eq_ignore_ascii_case(&wanted)
            || record.name.to_lowercase() == wanted
            || record
                .aliases
                .iter()
                .any(|alias| alias.to_lowercase() == wanted)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_codes_are_unique() {
        let alpha2: HashSet<_> = COUNTRIES.iter().map(|c| c.alpha2).collect();
        let alpha3: HashSet<_> = COUNTRIES.iter().map(|c| c.alpha3).collect();
        assert_eq!(alpha2.len(), COUNTRIES.len());
        assert_eq!(alpha3.len(), COUNTRIES.len());
    }

    #[test]
    fn test_lookup_by_name_code_and_alias() {
        assert_eq!(lookup_country("Germany").map(|c| c.alpha3), Some("DEU"));
        assert_eq!(lookup_country("  de ").map(|c| c.name), Some("Germany"));
        assert_eq!(lookup_country("Russia").map(|c| c.alpha2), Some("RU"));
        assert_eq!(lookup_country("TÜRKIYE").map(|c| c.alpha2), Some("TR"));
        assert_eq!(lookup_country("Turkey").map(|c| c.alpha2), Some("TR"));
        assert_eq!(lookup_country("South Korea").map(|c| c.alpha2), Some("KR"));
        assert_eq!(
            lookup_country("United States of America").map(|c| c.alpha2),
            Some("US")
        );
    }

    #[test]
    fn test_lookup_rejects_unknown_and_blank() {
        assert!(lookup_country("Atlantis").is_none());
        assert!(lookup_country("   ").is_none());
    }
}
