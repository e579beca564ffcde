//! Creed quote bank

/// Fixed list of Creed Bratton quotes used in creed mode.
///
/// Non-empty by construction; creed lookups index into this list and never fail.
pub const CREED_QUOTES: &[&str] = &[
    "Bears. Beets. Battlestar Galactica.",
    "The Taliban is the worst. Great heroin though.",
    "I want to be wined, dined, and sixty-nined.",
    "Nobody steals from Creed Bratton and gets away with it.",
    "If I can't scuba, then what's this all been about?",
    "Cool beans, man. I live by the quarry. We should hang out by the quarry and throw things down there.",
    "Two eyes, two ears, a chin, a mouth, ten fingers, two nipples.",
    "I already won the lottery. I was born in the US of A, baby.",
    "I've been involved in a number of cults both as a leader and a follower.",
    "The only difference between me and a homeless man is this job.",
    "Later skater.",
    "If that's flashing then lock me up.",
    "Jinx, buy me some Coke.",
    "www.creedthoughts.gov.www\\creedthoughts",
    "Strike, scream, and run.",
    "That wasn't a tapeworm.",
    "Northern lights cannabis indica.",
    "Bob Vance, Vance Refrigeration.",
];
