//! Nielsen DMA market names (partial table).

const DMA_NAMES: &[(i64, &str)] = &[
    (501, "New York"),
    (514, "Buffalo"),
    (516, "Rochester, NY"),
    (517, "Syracuse"),
    (518, "Binghamton"),
    (519, "Elmira (Corning)"),
    (520, "Utica"),
    (521, "Burlington/Plattsburgh"),
    (522, "Albany-Schenectady-Troy"),
    (577, "Wilkes Barre-Scranton"),
    (600, "Corpus Christi"),
    (604, "Columbia/Jefferson City"),
    (605, "Topeka"),
    (606, "Wichita-Hutchinson"),
    (609, "Chicago"),
    (610, "Peoria-Bloomington"),
    (611, "Rockford"),
    (612, "Davenport-Rock Island-Moline"),
    (613, "Quincy-Hannibal-Keokuk"),
    (633, "Odessa-Midland"),
    (807, "San Francisco-Oakland-San Jose"),
];

/// Market name for a DMA code, if known.
pub fn market_name(code: i64) -> Option<&'static str> {
    DMA_NAMES.binary_search_by_key(&code, |(c, _)| *c).ok().map(|i| DMA_NAMES[i].1)
}

/// Display label for a DMA: the market name, or the bare code when unknown.
pub fn dma_label(code: Option<i64>) -> String {
    match code {
        None => String::new(),
        Some(code) => market_name(code).map_or_else(|| code.to_string(), str::to_string),
    }
}
