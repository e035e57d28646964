use serde::de::{self, Deserializer, Visitor};
use std::fmt::Display;
use std::marker::PhantomData;
use std::str::FromStr;

/// Deserializes a number which may be sent as a string, or missing entirely.
pub fn option_str_to_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + TryFrom<u64>,
    T::Err: Display,
{
    struct OptionVisitor<T> {
        marker: PhantomData<T>,
    }
    
    impl<'de, T> Visitor<'de> for OptionVisitor<T>
    where
        T: FromStr + TryFrom<u64>,
        T::Err: Display,
    {
        type Value = Option<T>;
        
        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a number string")
        }
        
        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
        
        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
        
        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            T::try_from(v)
                .map(Some)
                .map_err(|_e| de::Error::custom("Number too large to fit in target type"))
        }
        
        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v.parse::<T>().map_err(de::Error::custom)?))
        }
    }
    
    deserializer.deserialize_any(OptionVisitor { marker: PhantomData })
}
