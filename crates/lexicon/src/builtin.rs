//! Built-in Tamil/English grocery-billing tables
//!
//! These are the default tables behind `LexiconSet::default()`. They are
//! data, not behavior: a deployment can replace any of them from YAML
//! without touching the matching algorithms.

use std::collections::HashMap;

/// Tamil spoken-number words, including dialectal variants heard from the
/// recognizer and the combining forms used inside compounds
/// (இருபத்து ஐந்து = 25).
const TAMIL_NUMBER_WORDS: &[(&str, f64)] = &[
    // Units
    ("பூஜ்யம்", 0.0),
    ("ஒன்று", 1.0),
    ("ஒரு", 1.0),
    ("இரண்டு", 2.0),
    ("மூன்று", 3.0),
    ("நான்கு", 4.0),
    ("ஐந்து", 5.0),
    ("ஆறு", 6.0),
    ("ஏழு", 7.0),
    ("எட்டு", 8.0),
    ("ஒன்பது", 9.0),
    ("பத்து", 10.0),
    // Teens
    ("பதினொன்று", 11.0),
    ("பன்னிரண்டு", 12.0),
    ("பதின்மூன்று", 13.0),
    ("பதினான்கு", 14.0),
    ("பதினைந்து", 15.0),
    ("பதினாறு", 16.0),
    ("பதினேழு", 17.0),
    ("பதினெட்டு", 18.0),
    ("பத்தொன்பது", 19.0),
    // Tens
    ("இருபது", 20.0),
    ("முப்பது", 30.0),
    ("நாற்பது", 40.0),
    ("ஐம்பது", 50.0),
    ("அறுபது", 60.0),
    ("எழுபது", 70.0),
    ("எண்பது", 80.0),
    ("தொண்ணூறு", 90.0),
    // Tens combining forms, spoken before a unit digit
    ("இருபத்து", 20.0),
    ("முப்பத்து", 30.0),
    ("நாற்பத்து", 40.0),
    ("ஐம்பத்து", 50.0),
    ("அறுபத்து", 60.0),
    ("எழுபத்து", 70.0),
    ("எண்பத்து", 80.0),
    ("தொண்ணூற்று", 90.0),
    // Hundreds and above
    ("நூறு", 100.0),
    ("இருநூறு", 200.0),
    ("முந்நூறு", 300.0),
    ("நானூறு", 400.0),
    ("ஐநூறு", 500.0),
    ("ஐந்நூறு", 500.0),
    ("அறுநூறு", 600.0),
    ("எழுநூறு", 700.0),
    ("எண்ணூறு", 800.0),
    ("தொள்ளாயிரம்", 900.0),
    ("ஆயிரம்", 1000.0),
    // Fractions
    ("அரை", 0.5),
    ("கால்", 0.25),
    ("முக்கால்", 0.75),
    ("ஒன்றரை", 1.5),
    ("இரண்டரை", 2.5),
    // Dialectal / recognizer variants
    ("ஒண்ணு", 1.0),
    ("ரெண்டு", 2.0),
    ("மூணு", 3.0),
    ("நாலு", 4.0),
    ("அஞ்சு", 5.0),
    ("ஒம்பது", 9.0),
    ("பதினஞ்சு", 15.0),
    ("அம்பது", 50.0),
];

/// English spoken-number words, including recognizer mis-hearings.
///
/// Deliberately excludes high-collision function words ("to", "for"):
/// correcting those corrupts ordinary speech more often than it helps.
const ENGLISH_NUMBER_WORDS: &[(&str, f64)] = &[
    ("zero", 0.0),
    ("one", 1.0),
    ("two", 2.0),
    ("three", 3.0),
    ("four", 4.0),
    ("five", 5.0),
    ("six", 6.0),
    ("seven", 7.0),
    ("eight", 8.0),
    ("nine", 9.0),
    ("ten", 10.0),
    ("eleven", 11.0),
    ("twelve", 12.0),
    ("thirteen", 13.0),
    ("fourteen", 14.0),
    ("fifteen", 15.0),
    ("sixteen", 16.0),
    ("seventeen", 17.0),
    ("eighteen", 18.0),
    ("nineteen", 19.0),
    ("twenty", 20.0),
    ("thirty", 30.0),
    ("forty", 40.0),
    ("fifty", 50.0),
    ("sixty", 60.0),
    ("seventy", 70.0),
    ("eighty", 80.0),
    ("ninety", 90.0),
    ("hundred", 100.0),
    ("thousand", 1000.0),
    ("half", 0.5),
    ("quarter", 0.25),
    // Common recognizer mis-hearings
    ("won", 1.0),
    ("too", 2.0),
    ("tree", 3.0),
    ("ate", 8.0),
];

/// Quantity unit keywords, English and Tamil. Matching is longest-first,
/// so "kilogram" wins over "kg" wins over "g".
const QUANTITY_UNITS: &[&str] = &[
    "kilograms",
    "kilogram",
    "kilos",
    "kilo",
    "kgs",
    "kg",
    "grams",
    "gram",
    "gms",
    "gm",
    "g",
    "litres",
    "litre",
    "liters",
    "liter",
    "l",
    "ml",
    "millilitre",
    "milliliter",
    "pieces",
    "piece",
    "packets",
    "packet",
    "pack",
    "dozen",
    "bunch",
    "bundle",
    "box",
    "bottle",
    "bag",
    "கிலோகிராம்",
    "கிலோ",
    "கிராம்",
    "லிட்டர்",
    "மில்லி",
    "பாக்கெட்",
    "டஜன்",
    "மூட்டை",
    "கட்டு",
    "துண்டு",
];

/// Price/rate keywords: what the speaker says around a spoken price.
const RATE_KEYWORDS: &[&str] = &[
    "rupees",
    "rupee",
    "rs",
    "₹",
    "bucks",
    "price",
    "ரூபாய்க்கு",
    "ரூபாய்",
    "ரூபா",
    "ரூவா",
    "ருபா",
    "விலை",
];

/// Grocery-domain item lexicon: canonical Tamil spellings plus the English
/// names customers mix in. Declaration order is the fuzzy-match tie-break
/// order, so the common staples sit first.
const GROCERY_ITEMS: &[&str] = &[
    // Vegetables (Tamil)
    "தக்காளி",
    "உருளைக்கிழங்கு",
    "வெங்காயம்",
    "கத்தரிக்காய்",
    "வெண்டைக்காய்",
    "கேரட்",
    "பீட்ரூட்",
    "முட்டைக்கோஸ்",
    "காலிஃபிளவர்",
    "பச்சை மிளகாய்",
    "இஞ்சி",
    "பூண்டு",
    "முருங்கைக்காய்",
    "சுரைக்காய்",
    "பாகற்காய்",
    "புடலங்காய்",
    "அவரைக்காய்",
    "பீன்ஸ்",
    "கீரை",
    "கொத்தமல்லி",
    "புதினா",
    "கறிவேப்பிலை",
    "எலுமிச்சை",
    "தேங்காய்",
    "பூசணிக்காய்",
    // Fruits (Tamil)
    "வாழைப்பழம்",
    "ஆப்பிள்",
    "ஆரஞ்சு",
    "மாம்பழம்",
    "திராட்சை",
    "பப்பாளி",
    "கொய்யா",
    "மாதுளை",
    "அன்னாசி",
    "சப்போட்டா",
    // Grains and staples (Tamil)
    "அரிசி",
    "கோதுமை",
    "பருப்பு",
    "துவரம் பருப்பு",
    "கடலை பருப்பு",
    "பாசிப்பருப்பு",
    "உளுந்து",
    "ராகி",
    "கம்பு",
    "சோளம்",
    "ரவை",
    "மைதா",
    "ஆட்டா",
    "சர்க்கரை",
    "வெல்லம்",
    "உப்பு",
    "எண்ணெய்",
    "நல்லெண்ணெய்",
    "தேங்காய் எண்ணெய்",
    "நெய்",
    // Dairy and protein (Tamil)
    "பால்",
    "தயிர்",
    "வெண்ணெய்",
    "பனீர்",
    "முட்டை",
    // Spices (Tamil)
    "மிளகாய் வற்றல்",
    "மிளகு",
    "சீரகம்",
    "கடுகு",
    "வெந்தயம்",
    "மஞ்சள் தூள்",
    "மல்லி தூள்",
    "ஏலக்காய்",
    "கிராம்பு",
    "பட்டை",
    "பெருங்காயம்",
    "புளி",
    // English names heard in code-mixed speech
    "tomato",
    "potato",
    "onion",
    "carrot",
    "beetroot",
    "cabbage",
    "cauliflower",
    "beans",
    "brinjal",
    "ladies finger",
    "drumstick",
    "ginger",
    "garlic",
    "lemon",
    "coconut",
    "banana",
    "apple",
    "orange",
    "mango",
    "grapes",
    "papaya",
    "guava",
    "pineapple",
    "rice",
    "wheat",
    "dal",
    "atta",
    "maida",
    "rava",
    "sugar",
    "salt",
    "jaggery",
    "oil",
    "ghee",
    "milk",
    "curd",
    "butter",
    "paneer",
    "egg",
    "eggs",
    "bread",
    "biscuit",
    "tea",
    "coffee",
    "soap",
    "shampoo",
    "toothpaste",
];

/// Colloquial spoken Tamil mapped to its formal written form.
const DIGLOSSIA_MAP: &[(&str, &str)] = &[
    // Spoken number forms
    ("ஒண்ணு", "ஒன்று"),
    ("ரெண்டு", "இரண்டு"),
    ("மூணு", "மூன்று"),
    ("நாலு", "நான்கு"),
    ("அஞ்சு", "ஐந்து"),
    ("ஒம்பது", "ஒன்பது"),
    ("பதினஞ்சு", "பதினைந்து"),
    ("அம்பது", "ஐம்பது"),
    // Clipped item names
    ("கத்திரிக்கா", "கத்தரிக்காய்"),
    ("கத்தரிக்கா", "கத்தரிக்காய்"),
    ("வெண்டைக்கா", "வெண்டைக்காய்"),
    ("வாழப்பழம்", "வாழைப்பழம்"),
    ("தேங்கா", "தேங்காய்"),
    ("மிளகா", "மிளகாய்"),
    ("எலுமிச்சம்பழம்", "எலுமிச்சை"),
    ("உருளை", "உருளைக்கிழங்கு"),
    // Everyday spoken forms
    ("வேணும்", "வேண்டும்"),
    ("வேணாம்", "வேண்டாம்"),
    ("இருக்கு", "இருக்கிறது"),
    ("குடுங்க", "கொடுங்கள்"),
    ("போடுங்க", "போடுங்கள்"),
    ("வாங்க", "வாருங்கள்"),
    ("எவ்ளோ", "எவ்வளவு"),
    ("கெடைக்குமா", "கிடைக்குமா"),
];

/// Exact recognizer-error corrections (misheard token → canonical token).
const ASR_CORRECTIONS: &[(&str, &str)] = &[
    ("தக்காலி", "தக்காளி"),
    ("தக்களி", "தக்காளி"),
    ("உருளகிழங்கு", "உருளைக்கிழங்கு"),
    ("வெங்கயம்", "வெங்காயம்"),
    ("வெங்காய", "வெங்காயம்"),
    ("சர்கரை", "சர்க்கரை"),
    ("tomoto", "tomato"),
    ("tamato", "tomato"),
    ("potatoe", "potato"),
    ("onian", "onion"),
    ("bannana", "banana"),
    ("kelo", "kilo"),
    ("killo", "kilo"),
];

/// English loanwords passed through untouched inside Tamil speech
/// (units and billing vocabulary the shopkeeper says in English).
const ENGLISH_LOANWORDS: &[&str] = &[
    "kg",
    "kgs",
    "g",
    "gm",
    "gms",
    "kilo",
    "kilogram",
    "gram",
    "litre",
    "liter",
    "l",
    "ml",
    "packet",
    "pack",
    "piece",
    "dozen",
    "rate",
    "price",
    "rupees",
    "rs",
    "bill",
    "total",
    "free",
    "offer",
];

pub(crate) fn tamil_numbers() -> HashMap<String, f64> {
    TAMIL_NUMBER_WORDS
        .iter()
        .map(|&(w, v)| (w.to_string(), v))
        .collect()
}

pub(crate) fn english_numbers() -> HashMap<String, f64> {
    ENGLISH_NUMBER_WORDS
        .iter()
        .map(|&(w, v)| (w.to_string(), v))
        .collect()
}

pub(crate) fn quantity_units() -> Vec<String> {
    QUANTITY_UNITS.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn rate_keywords() -> Vec<String> {
    RATE_KEYWORDS.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn grocery_items() -> Vec<String> {
    GROCERY_ITEMS.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn diglossia_map() -> HashMap<String, String> {
    DIGLOSSIA_MAP
        .iter()
        .map(|&(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub(crate) fn asr_corrections() -> HashMap<String, String> {
    ASR_CORRECTIONS
        .iter()
        .map(|&(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub(crate) fn english_loanwords() -> Vec<String> {
    ENGLISH_LOANWORDS.iter().map(|s| s.to_string()).collect()
}
