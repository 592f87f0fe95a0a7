use de::Visitor;
use serde::de;
use serde::Deserializer;

/// The `erro` flag of a CEP lookup. ViaCEP sends `true`, some proxies send
/// `"true"`, and a missing or null flag means the CEP was found.
pub fn lookup_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LookupFlagVisitor)
}

struct LookupFlagVisitor;

impl<'de> Visitor<'de> for LookupFlagVisitor {
    type Value = bool;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a lookup flag: true, false, \"true\", \"false\" or null")
    }

    fn visit_bool<E>(self, value: bool) -> Result<bool, E>
    where
        E: de::Error,
    {
        Ok(value)
    }

    fn visit_str<E>(self, value: &str) -> Result<bool, E>
    where
        E: de::Error,
    {
        match value {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
        }
    }

    fn visit_unit<E>(self) -> Result<bool, E>
    where
        E: de::Error,
    {
        Ok(false)
    }
}
