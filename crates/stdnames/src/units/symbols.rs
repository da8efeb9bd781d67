//! Symbol tables for the unit normalizer: SI prefixes and the units the
//! registry recognizes, each with its short symbol, long name, and the
//! spelling variants accepted on input.

#[derive(Debug, PartialEq, Eq)]
pub struct Prefix {
    pub symbol: &'static str,
    pub name: &'static str,
    /// Alternate symbol spellings (e.g. `u` for micro).
    pub aliases: &'static [&'static str],
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnitDef {
    pub symbol: &'static str,
    pub name: &'static str,
    /// Alternate names: plurals and variant spellings.
    pub aliases: &'static [&'static str],
}

// Ordered largest-first so that `da` is tried before `d`.
pub const PREFIXES: &[Prefix] = &[
    Prefix { symbol: "Y", name: "yotta", aliases: &[] },
    Prefix { symbol: "Z", name: "zetta", aliases: &[] },
    Prefix { symbol: "E", name: "exa", aliases: &[] },
    Prefix { symbol: "P", name: "peta", aliases: &[] },
    Prefix { symbol: "T", name: "tera", aliases: &[] },
    Prefix { symbol: "G", name: "giga", aliases: &[] },
    Prefix { symbol: "M", name: "mega", aliases: &[] },
    Prefix { symbol: "k", name: "kilo", aliases: &[] },
    Prefix { symbol: "h", name: "hecto", aliases: &[] },
    Prefix { symbol: "da", name: "deka", aliases: &[] },
    Prefix { symbol: "d", name: "deci", aliases: &[] },
    Prefix { symbol: "c", name: "centi", aliases: &[] },
    Prefix { symbol: "m", name: "milli", aliases: &[] },
    Prefix { symbol: "\u{b5}", name: "micro", aliases: &["u", "\u{3bc}"] },
    Prefix { symbol: "n", name: "nano", aliases: &[] },
    Prefix { symbol: "p", name: "pico", aliases: &[] },
    Prefix { symbol: "f", name: "femto", aliases: &[] },
    Prefix { symbol: "a", name: "atto", aliases: &[] },
    Prefix { symbol: "z", name: "zepto", aliases: &[] },
    Prefix { symbol: "y", name: "yocto", aliases: &[] },
];

pub const UNITS: &[UnitDef] = &[
    UnitDef { symbol: "m", name: "meter", aliases: &["meters", "metre", "metres"] },
    UnitDef { symbol: "s", name: "second", aliases: &["seconds", "sec", "secs"] },
    UnitDef { symbol: "g", name: "gram", aliases: &["grams", "gramme", "grammes"] },
    UnitDef { symbol: "A", name: "ampere", aliases: &["amperes", "amp", "amps"] },
    UnitDef { symbol: "K", name: "kelvin", aliases: &["kelvins"] },
    UnitDef { symbol: "mol", name: "mole", aliases: &["moles"] },
    UnitDef { symbol: "cd", name: "candela", aliases: &["candelas"] },
    UnitDef { symbol: "rad", name: "radian", aliases: &["radians"] },
    UnitDef { symbol: "sr", name: "steradian", aliases: &["steradians"] },
    UnitDef { symbol: "Hz", name: "hertz", aliases: &[] },
    UnitDef { symbol: "N", name: "newton", aliases: &["newtons"] },
    UnitDef { symbol: "Pa", name: "pascal", aliases: &["pascals"] },
    UnitDef { symbol: "J", name: "joule", aliases: &["joules"] },
    UnitDef { symbol: "W", name: "watt", aliases: &["watts"] },
    UnitDef { symbol: "C", name: "coulomb", aliases: &["coulombs"] },
    UnitDef { symbol: "V", name: "volt", aliases: &["volts"] },
    UnitDef { symbol: "F", name: "farad", aliases: &["farads"] },
    UnitDef { symbol: "\u{3a9}", name: "ohm", aliases: &["ohms"] },
    UnitDef { symbol: "S", name: "siemens", aliases: &[] },
    UnitDef { symbol: "Wb", name: "weber", aliases: &["webers"] },
    UnitDef { symbol: "T", name: "tesla", aliases: &["teslas"] },
    UnitDef { symbol: "H", name: "henry", aliases: &["henries", "henrys"] },
    UnitDef { symbol: "lm", name: "lumen", aliases: &["lumens"] },
    UnitDef { symbol: "lx", name: "lux", aliases: &[] },
    UnitDef { symbol: "Bq", name: "becquerel", aliases: &["becquerels"] },
    UnitDef { symbol: "Gy", name: "gray", aliases: &["grays"] },
    UnitDef { symbol: "Sv", name: "sievert", aliases: &["sieverts"] },
    UnitDef {
        symbol: "eV",
        name: "electron_volt",
        aliases: &["electron_volts", "electronvolt", "electronvolts"],
    },
    UnitDef { symbol: "bar", name: "bar", aliases: &["bars"] },
    UnitDef { symbol: "min", name: "minute", aliases: &["minutes"] },
    UnitDef { symbol: "h", name: "hour", aliases: &["hours", "hr", "hrs"] },
    UnitDef { symbol: "L", name: "liter", aliases: &["liters", "litre", "litres"] },
];

/// Resolve a token against the table: exact matches win over prefix splits,
/// so `cd` is candela rather than centi-day and `min` is minute rather than
/// milli-anything.
pub(crate) fn lookup(token: &str) -> Option<(Option<&'static Prefix>, &'static UnitDef)> {
    if let Some(def) = unit(token) {
        return Some((None, def));
    }
    prefixed(token)
}

fn unit(token: &str) -> Option<&'static UnitDef> {
    UNITS
        .iter()
        .find(|u| u.symbol == token || u.name == token || u.aliases.contains(&token))
}

fn unit_by_symbol(token: &str) -> Option<&'static UnitDef> {
    UNITS.iter().find(|u| u.symbol == token)
}

fn unit_by_name(token: &str) -> Option<&'static UnitDef> {
    UNITS
        .iter()
        .find(|u| u.name == token || u.aliases.contains(&token))
}

/// Split `keV`-style tokens into prefix and unit. Symbol prefixes pair with
/// symbol remainders, spelled-out prefixes with long-name remainders.
fn prefixed(token: &str) -> Option<(Option<&'static Prefix>, &'static UnitDef)> {
    for prefix in PREFIXES {
        let symbols = std::iter::once(prefix.symbol).chain(prefix.aliases.iter().copied());
        for symbol in symbols {
            if let Some(rest) = token.strip_prefix(symbol) {
                if !rest.is_empty() {
                    if let Some(def) = unit_by_symbol(rest) {
                        return Some((Some(prefix), def));
                    }
                }
            }
        }
        if let Some(rest) = token.strip_prefix(prefix.name) {
            if !rest.is_empty() {
                if let Some(def) = unit_by_name(rest) {
                    return Some((Some(prefix), def));
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_symbol_lookup() {
        let (prefix, def) = lookup("m").unwrap();
        assert!(prefix.is_none());
        assert_eq!(def.name, "meter");
    }

    #[test]
    fn test_long_name_and_alias_lookup() {
        assert_eq!(lookup("ampere").unwrap().1.symbol, "A");
        assert_eq!(lookup("amps").unwrap().1.symbol, "A");
        assert_eq!(lookup("electron_volt").unwrap().1.symbol, "eV");
    }

    #[test]
    fn test_exact_match_wins_over_prefix_split() {
        // candela, not centi-day; minute, not milli-in; mole, not milli-ol
        assert!(lookup("cd").unwrap().0.is_none());
        assert!(lookup("min").unwrap().0.is_none());
        assert!(lookup("mol").unwrap().0.is_none());
        // hour beats the hecto prefix
        assert_eq!(lookup("h").unwrap().1.name, "hour");
    }

    #[test]
    fn test_symbol_prefix_split() {
        let (prefix, def) = lookup("keV").unwrap();
        assert_eq!(prefix.unwrap().name, "kilo");
        assert_eq!(def.symbol, "eV");

        let (prefix, def) = lookup("mA").unwrap();
        assert_eq!(prefix.unwrap().name, "milli");
        assert_eq!(def.symbol, "A");

        let (prefix, def) = lookup("kg").unwrap();
        assert_eq!(prefix.unwrap().name, "kilo");
        assert_eq!(def.symbol, "g");
    }

    #[test]
    fn test_name_prefix_split() {
        let (prefix, def) = lookup("kilometers").unwrap();
        assert_eq!(prefix.unwrap().symbol, "k");
        assert_eq!(def.symbol, "m");

        let (prefix, def) = lookup("milliamperes").unwrap();
        assert_eq!(prefix.unwrap().symbol, "m");
        assert_eq!(def.symbol, "A");
    }

    #[test]
    fn test_micro_spellings() {
        assert_eq!(lookup("us").unwrap().0.unwrap().name, "micro");
        assert_eq!(lookup("\u{b5}s").unwrap().0.unwrap().name, "micro");
        assert_eq!(lookup("microseconds").unwrap().0.unwrap().name, "micro");
    }

    #[test]
    fn test_deka_before_deci() {
        let (prefix, def) = lookup("dam").unwrap();
        assert_eq!(prefix.unwrap().name, "deka");
        assert_eq!(def.symbol, "m");
    }

    #[test]
    fn test_unknown_token() {
        assert!(lookup("parsec").is_none());
        assert!(lookup("eVv").is_none());
        assert!(lookup("").is_none());
    }
}
