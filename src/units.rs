//! Unit abbreviation lookup
//!
//! Maps unit strings found in signal headers (`mV`, `m/s^2`, `cmH2O`) to terms
//! of the UOME unit ontology. The engine never calls this; it is used when
//! populating a signal's `units`.

use crate::rdf::vocab::UOME_NS;

/// Whole strings with a fixed term
fn direct(units: &str) -> Option<&'static str> {
    Some(match units {
        "bpm" => "BeatsPerMinute",
        "cc" => "CubicCentimetre",
        "pm" | "1/min" => "PerMinute",
        "Lpm" | "lpm" => "LitrePerMinute",
        "mv" => "Millivolt",
        "uV-mrs" => "Microvolt",
        "annotation" => "AnnotationData",
        _ => return None,
    })
}

fn base_unit(symbol: &str) -> Option<&'static str> {
    Some(match symbol {
        "%" => "Percent",
        "A" => "ampere",
        "deg" => "DegreeOfArc",
        "degC" => "DegreeCelsius",
        "mHg" => "metresOfMercury",
        "mH2O" => "metresOfWater",
        "g" => "gram",
        "J" => "joule",
        "K" => "Kelvin",
        "l" | "L" => "litre",
        "m" => "metre",
        "min" => "minute",
        "s" => "second",
        "V" => "volt",
        "W" => "watt",
        "bar" => "bar",
        "BPM" | "bpm" => "BeatsPerMinute",
        _ => return None,
    })
}

fn si_prefix(letter: char) -> Option<&'static str> {
    Some(match letter {
        'Y' => "Yotta",
        'Z' => "Zetta",
        'E' => "Exa",
        'P' => "Peta",
        'T' => "Tera",
        'G' => "Giga",
        'M' => "Mega",
        'K' => "Kilo",
        'H' => "Hecto",
        'D' => "Deca",
        'd' => "Deci",
        'c' => "Centi",
        'm' => "Milli",
        'u' | 'µ' => "Micro",
        'n' => "Nano",
        'p' => "Pico",
        'f' => "Femto",
        'a' => "Atto",
        'z' => "Zepto",
        'y' => "Yocto",
        _ => return None,
    })
}

/// `V` → `Volt`, `mV` → `Millivolt`
fn unit_name(symbol: &str) -> Option<String> {
    if let Some(unit) = base_unit(symbol) {
        return Some(upper_first(unit));
    }
    let mut chars = symbol.chars();
    let prefix = si_prefix(chars.next()?)?;
    let unit = base_unit(chars.as_str())?;
    Some(format!("{prefix}{unit}"))
}

/// `s^2` → `SecondSquared`, `m^3` → `CubicMetre`
fn power(factor: &str) -> Option<String> {
    let Some((base, exponent)) = factor.split_once('^') else {
        return unit_name(factor);
    };
    let name = unit_name(base)?;
    if name.to_lowercase().ends_with("second") {
        let suffix = match exponent {
            "2" => "Squared",
            "3" => "Cubed",
            _ => return None,
        };
        Some(name + suffix)
    } else {
        let prefix = match exponent {
            "2" => "Square",
            "3" => "Cubic",
            _ => return None,
        };
        Some(format!("{prefix}{name}"))
    }
}

/// `Kg*m` → `KilogramMetre`
fn product(part: &str) -> Option<String> {
    part.split('*').map(power).collect()
}

fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Local name of the unit term for a unit string
pub fn unit_name_for(units: &str) -> Option<String> {
    if units.is_empty() {
        return None;
    }
    if let Some(name) = direct(units) {
        return Some(name.to_string());
    }
    let parts: Option<Vec<String>> = units.split('/').map(product).collect();
    parts.map(|p| p.join("Per"))
}

/// Term IRI for a unit string, `None` when any part is unknown
pub fn unit_term(units: &str) -> Option<String> {
    unit_name_for(units).map(|name| format!("{UOME_NS}{name}"))
}
