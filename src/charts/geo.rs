//! Approximate country centroids for the map view, keyed by ISO 3166-1 alpha-3.

/// `(iso_alpha, longitude, latitude)`
const CENTROIDS: &[(&str, f64, f64)] = &[
    ("AFG", 67.7, 33.9),
    ("AGO", 17.9, -11.2),
    ("ALB", 20.2, 41.2),
    ("ARG", -63.6, -38.4),
    ("AUS", 133.8, -25.3),
    ("AUT", 14.6, 47.5),
    ("BDI", 29.9, -3.4),
    ("BEL", 4.5, 50.5),
    ("BEN", 2.3, 9.3),
    ("BFA", -1.6, 12.2),
    ("BGD", 90.4, 23.7),
    ("BGR", 25.5, 42.7),
    ("BHR", 50.6, 26.0),
    ("BIH", 17.7, 43.9),
    ("BOL", -63.6, -16.3),
    ("BRA", -51.9, -14.2),
    ("BWA", 24.7, -22.3),
    ("CAF", 20.9, 6.6),
    ("CAN", -106.3, 56.1),
    ("CHE", 8.2, 46.8),
    ("CHL", -71.5, -35.7),
    ("CHN", 104.2, 35.9),
    ("CIV", -5.5, 7.5),
    ("CMR", 12.4, 7.4),
    ("COD", 21.8, -4.0),
    ("COG", 15.8, -0.2),
    ("COL", -74.3, 4.6),
    ("COM", 43.9, -11.9),
    ("CRI", -84.0, 9.7),
    ("CUB", -77.8, 21.5),
    ("CZE", 15.5, 49.8),
    ("DEU", 10.5, 51.2),
    ("DJI", 42.6, 11.8),
    ("DNK", 9.5, 56.3),
    ("DOM", -70.2, 18.7),
    ("DZA", 1.7, 28.0),
    ("ECU", -78.2, -1.8),
    ("EGY", 30.8, 26.8),
    ("ERI", 39.8, 15.2),
    ("ESP", -3.7, 40.5),
    ("ETH", 40.5, 9.1),
    ("FIN", 25.7, 61.9),
    ("FRA", 2.2, 46.2),
    ("GAB", 11.6, -0.8),
    ("GBR", -3.4, 55.4),
    ("GHA", -1.0, 7.9),
    ("GIN", -9.7, 9.9),
    ("GMB", -15.3, 13.4),
    ("GNB", -15.2, 11.8),
    ("GNQ", 10.3, 1.7),
    ("GRC", 21.8, 39.1),
    ("GTM", -90.2, 15.8),
    ("HKG", 114.1, 22.4),
    ("HND", -86.2, 15.2),
    ("HRV", 15.2, 45.1),
    ("HTI", -72.3, 19.0),
    ("HUN", 19.5, 47.2),
    ("IDN", 113.9, -0.8),
    ("IND", 79.0, 20.6),
    ("IRL", -8.2, 53.4),
    ("IRN", 53.7, 32.4),
    ("IRQ", 43.7, 33.2),
    ("ISL", -19.0, 65.0),
    ("ISR", 34.9, 31.0),
    ("ITA", 12.6, 41.9),
    ("JAM", -77.3, 18.1),
    ("JOR", 36.2, 30.6),
    ("JPN", 138.3, 36.2),
    ("KEN", 37.9, 0.0),
    ("KHM", 104.9, 12.6),
    ("KOR", 127.8, 35.9),
    ("KWT", 47.5, 29.3),
    ("LBN", 35.9, 33.9),
    ("LBR", -9.4, 6.4),
    ("LBY", 17.2, 26.3),
    ("LKA", 80.8, 7.9),
    ("LSO", 28.2, -29.6),
    ("MAR", -7.1, 31.8),
    ("MDG", 46.9, -18.8),
    ("MEX", -102.6, 23.6),
    ("MLI", -4.0, 17.6),
    ("MMR", 96.0, 21.9),
    ("MNE", 19.4, 42.7),
    ("MNG", 103.8, 46.9),
    ("MOZ", 35.5, -18.7),
    ("MRT", -10.9, 21.0),
    ("MUS", 57.6, -20.3),
    ("MWI", 34.3, -13.3),
    ("MYS", 102.0, 4.2),
    ("NAM", 18.5, -23.0),
    ("NER", 8.1, 17.6),
    ("NGA", 8.7, 9.1),
    ("NIC", -85.2, 12.9),
    ("NLD", 5.3, 52.1),
    ("NOR", 8.5, 60.5),
    ("NPL", 84.1, 28.4),
    ("NZL", 174.9, -40.9),
    ("OMN", 55.9, 21.5),
    ("PAK", 69.3, 30.4),
    ("PAN", -80.8, 8.5),
    ("PER", -75.0, -9.2),
    ("PHL", 121.8, 12.9),
    ("POL", 19.1, 51.9),
    ("PRI", -66.6, 18.2),
    ("PRK", 127.5, 40.3),
    ("PRT", -8.2, 39.4),
    ("PRY", -58.4, -23.4),
    ("PSE", 35.2, 31.9),
    ("REU", 55.5, -21.1),
    ("ROU", 25.0, 45.9),
    ("RWA", 29.9, -1.9),
    ("SAU", 45.1, 23.9),
    ("SDN", 30.2, 12.9),
    ("SEN", -14.5, 14.5),
    ("SGP", 103.8, 1.4),
    ("SLE", -11.8, 8.5),
    ("SLV", -88.9, 13.8),
    ("SOM", 46.2, 5.2),
    ("SRB", 21.0, 44.0),
    ("STP", 6.6, 0.2),
    ("SVK", 19.7, 48.7),
    ("SVN", 15.0, 46.2),
    ("SWE", 18.6, 60.1),
    ("SWZ", 31.5, -26.5),
    ("SYR", 39.0, 34.8),
    ("TCD", 18.7, 15.5),
    ("TGO", 0.8, 8.6),
    ("THA", 101.0, 15.9),
    ("TTO", -61.2, 10.7),
    ("TUN", 9.5, 33.9),
    ("TUR", 35.2, 39.0),
    ("TWN", 121.0, 23.7),
    ("TZA", 34.9, -6.4),
    ("UGA", 32.3, 1.4),
    ("URY", -55.8, -32.5),
    ("USA", -95.7, 37.1),
    ("VEN", -66.6, 6.4),
    ("VNM", 108.3, 14.1),
    ("YEM", 48.5, 15.6),
    ("ZAF", 22.9, -30.6),
    ("ZMB", 27.8, -13.1),
    ("ZWE", 29.2, -19.0),
];

/// `(longitude, latitude)` of a country, if known.
pub fn centroid(iso_alpha: &str) -> Option<(f64, f64)> {
    CENTROIDS
        .binary_search_by(|(code, _, _)| (*code).cmp(iso_alpha))
        .ok()
        .map(|i| (CENTROIDS[i].1, CENTROIDS[i].2))
}
