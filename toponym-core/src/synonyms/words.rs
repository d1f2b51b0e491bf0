//! Built-in street-type words.
//!
//! Generic address-component words (street, avenue, square, ...) and their
//! common abbreviations, grouped by language. Entries are raw text; the
//! dictionary canonicalizes them on construction, so case and accents here
//! do not matter. Duplicates across languages are harmless.

#[rustfmt::skip]
pub const STREET_SYNONYMS: &[&str] = &[
    // Russian
    "аллея", "бульвар", "набережная", "переулок", "площадь", "проезд", "проспект", "шоссе",
    "тупик", "улица", "тракт", "ал", "бул", "наб", "пер", "пл", "пр", "просп", "ш", "туп",
    "ул", "тр",

    // English
    "street", "avenue", "square", "road", "boulevard", "drive", "highway", "lane", "way",
    "circle", "st", "av", "ave", "sq", "rd", "blvd", "dr", "hwy", "ln",

    // Lithuanian
    "g", "pr", "pl", "kel",

    // Bulgarian
    "булевард", "бул", "площад", "пл", "улица", "ул", "квартал", "кв",

    // Canada
    "allee", "alley", "autoroute", "aut", "bypass", "byway", "carrefour", "carref", "chemin",
    "cercle", "circle", "côte", "crossing", "cross", "expressway", "freeway", "fwy", "line",
    "link", "loop", "parkway", "pky", "pkwy", "path", "pathway", "ptway", "route", "rue",
    "rte", "trail", "walk",

    // Czech
    "ulice", "ul", "náměstí", "nám",

    // German
    "allee", "al", "brücke", "br", "chaussee", "gasse", "gr", "pfad", "straße", "str", "weg",
    "platz",

    // Spanish
    "avenida", "avd", "avda", "bulevar", "bulev", "calle", "calleja", "cllja", "callejón",
    "callej", "cjon", "cllon", "callejuela", "cjla", "callizo", "cllzo", "calzada", "czada",
    "costera", "coste", "plza", "pza", "plazoleta", "pzta", "plazuela", "plzla", "tránsito",
    "trans", "transversal", "trval", "trasera", "tras", "travesía", "trva",

    // French
    "rue", "avenue", "carré", "cercle", "route", "boulevard", "drive", "autoroute", "lane",
    "chemin",

    // Dutch
    "laan", "ln.", "straat", "steenweg", "stwg", "st",

    // Norwegian
    "vei", "veien", "vn", "gaten", "gata", "gt", "plass", "plassen", "sving", "svingen", "sv",

    // Polish
    "aleja", "aleje", "aleji", "alejach", "aleją", "plac", "placu", "placem", "ulica", "ulicy",

    // Portuguese
    "street", "avenida", "quadrado", "estrada", "boulevard", "carro", "auto-estrada", "lane",
    "caminho",

    // Romanian
    "bul", "bdul", "blv", "bulevard", "bulevardu", "calea", "cal", "piața", "pţa", "pța",
    "strada", "stra", "stradela", "sdla", "stradă", "unitate", "autostradă", "lane",

    // Slovenian
    "cesta",

    // Finnish
    "kaari", "kri", "katu", "kuja", "kj", "kylä", "polku", "tie", "t", "tori", "väylä", "vlä",

    // Swedish
    "väg", "vägen", "gatan", "gränd", "gränden", "stig", "stigen", "plats", "platsen",

    // Turkish
    "sokak", "sk", "sok", "sokağı", "cadde", "cd", "caddesi", "bulvar", "bulvarı",

    // Vietnamese
    "quốc lộ", "ql", "tỉnh lộ", "tl", "Đại lộ", "Đl", "Đường", "Đ", "Đường sắt", "Đs",
    "Đường phố", "Đp", "vuông", "con Đường", "Đại lộ", "Đường cao tốc",

    // Ukrainian
    "дорога", "провулок", "площа", "шосе", "вулиця", "дор", "пров", "вул",
];
