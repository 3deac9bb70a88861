use baro_core::tooltip::{Formatters, UNIT_SENTINEL};

/// Hours in one working day, used when splitting fractional days.
const HOURS_PER_DAY: f64 = 8.0;

/// Unit appended to tick labels and tooltip values on the demo page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Unit {
    #[default]
    None,
    Kilometers,
    Miles,
    Celsius,
    Fahrenheit,
    Days,
}

/// Tooltip conversion offered for a unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Conversion {
    #[default]
    None,
    KmToMiles,
    MilesToKm,
    CelsiusToFahrenheit,
    FahrenheitToCelsius,
    DayHourMinute,
    DayHour,
}

impl Unit {
    pub const ALL: [Unit; 6] = [
        Unit::None,
        Unit::Kilometers,
        Unit::Miles,
        Unit::Celsius,
        Unit::Fahrenheit,
        Unit::Days,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Unit::None => "none",
            Unit::Kilometers => "km",
            Unit::Miles => "mile",
            Unit::Celsius => "celsius",
            Unit::Fahrenheit => "fahrenheit",
            Unit::Days => "day",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Unit::None => "No Unit",
            Unit::Kilometers => "Kilometers",
            Unit::Miles => "Miles",
            Unit::Celsius => "Celsius",
            Unit::Fahrenheit => "Fahrenheit",
            Unit::Days => "Days",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|unit| unit.key() == key)
            .unwrap_or_default()
    }

    pub fn append(self, value: f64) -> String {
        match self {
            Unit::None => value.to_string(),
            Unit::Kilometers => format!("{value} km"),
            Unit::Miles => format!("{value} mi"),
            Unit::Celsius => format!("{value}°C"),
            Unit::Fahrenheit => format!("{value}°F"),
            Unit::Days => format!("{value} d"),
        }
    }

    /// Conversions that make sense for this unit, always led by [`Conversion::None`].
    pub fn conversions(self) -> &'static [Conversion] {
        match self {
            Unit::None => &[Conversion::None],
            Unit::Kilometers => &[Conversion::None, Conversion::KmToMiles],
            Unit::Miles => &[Conversion::None, Conversion::MilesToKm],
            Unit::Celsius => &[Conversion::None, Conversion::CelsiusToFahrenheit],
            Unit::Fahrenheit => &[Conversion::None, Conversion::FahrenheitToCelsius],
            Unit::Days => &[Conversion::None, Conversion::DayHourMinute, Conversion::DayHour],
        }
    }
}

impl Conversion {
    pub fn key(self) -> &'static str {
        match self {
            Conversion::None => "none",
            Conversion::KmToMiles => "kmToMile",
            Conversion::MilesToKm => "mileToKm",
            Conversion::CelsiusToFahrenheit => "celsiusToFahrenheit",
            Conversion::FahrenheitToCelsius => "fahrenheitToCelsius",
            Conversion::DayHourMinute => "dayHourMinute",
            Conversion::DayHour => "dayHour",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Conversion::None => "No Formatter",
            Conversion::KmToMiles => "Km to Miles",
            Conversion::MilesToKm => "Miles to Km",
            Conversion::CelsiusToFahrenheit => "Celsius to Fahrenheit",
            Conversion::FahrenheitToCelsius => "Fahrenheit to Celsius",
            Conversion::DayHourMinute => "Days, Hours, Minutes",
            Conversion::DayHour => "Days, Hours",
        }
    }

    /// Looks `key` up among the conversions of `unit`.
    pub fn from_key(unit: Unit, key: &str) -> Self {
        unit.conversions()
            .iter()
            .copied()
            .find(|conversion| conversion.key() == key)
            .unwrap_or_default()
    }

    /// Tooltip text, or the unit sentinel when no conversion is selected.
    pub fn apply(self, value: f64) -> String {
        match self {
            Conversion::None => UNIT_SENTINEL.to_string(),
            Conversion::KmToMiles => format!("{:.2} Miles", value * 0.621371),
            Conversion::MilesToKm => format!("{:.2} km", value * 1.60934),
            Conversion::CelsiusToFahrenheit => format!("{:.1}°F", value * 9.0 / 5.0 + 32.0),
            Conversion::FahrenheitToCelsius => format!("{:.1}°C", (value - 32.0) * 5.0 / 9.0),
            Conversion::DayHourMinute => {
                let days = value.floor();
                let hours = (value - days) * HOURS_PER_DAY;
                let minutes = ((hours - hours.floor()) * 60.0).floor();
                format!("{days} d, {} h, {minutes} m", hours.floor())
            }
            Conversion::DayHour => {
                let days = value.floor();
                let hours = ((value - days) * HOURS_PER_DAY).floor();
                format!("{days} d, {hours} h")
            }
        }
    }
}

/// Formatter pair for the gauge: the unit labels ticks, the conversion
/// (when chosen) replaces tooltip values.
pub fn formatters_for(unit: Unit, conversion: Conversion) -> Formatters {
    let formatters = Formatters::default().with_tick(move |value| conversion.apply(value));
    match unit {
        Unit::None => formatters,
        unit => formatters.with_unit(move |value| unit.append(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_keys_fall_back_to_none() {
        assert_eq!(Unit::from_key("parsec"), Unit::None);
        assert_eq!(Unit::from_key("km"), Unit::Kilometers);
        assert_eq!(Conversion::from_key(Unit::Kilometers, "mileToKm"), Conversion::None);
        assert_eq!(Conversion::from_key(Unit::Miles, "mileToKm"), Conversion::MilesToKm);
    }

    #[test]
    fn conversions_format_like_the_demo() {
        assert_eq!(Conversion::KmToMiles.apply(10.0), "6.21 Miles");
        assert_eq!(Conversion::CelsiusToFahrenheit.apply(100.0), "212.0°F");
        assert_eq!(Conversion::FahrenheitToCelsius.apply(32.0), "0.0°C");
        assert_eq!(Conversion::DayHourMinute.apply(2.5), "2 d, 4 h, 0 m");
        assert_eq!(Conversion::DayHour.apply(1.25), "1 d, 2 h");
    }

    #[test]
    fn unit_without_conversion_labels_tooltips() {
        let formatters = formatters_for(Unit::Celsius, Conversion::None);
        assert_eq!(formatters.format_value(21.0), "21°C");
        assert_eq!(formatters.format_tick(40.0), "40°C");
    }

    #[test]
    fn conversion_wins_for_tooltips_only() {
        let formatters = formatters_for(Unit::Kilometers, Conversion::KmToMiles);
        assert_eq!(formatters.format_value(10.0), "6.21 Miles");
        assert_eq!(formatters.format_tick(10.0), "10 km");
    }

    #[test]
    fn no_unit_prints_plain_numbers() {
        let formatters = formatters_for(Unit::None, Conversion::None);
        assert_eq!(formatters.format_value(7.5), "7.5");
        assert_eq!(formatters.format_tick(8.0), "8");
    }
}
