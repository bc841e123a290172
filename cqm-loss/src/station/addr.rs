use anyhow::{Context, anyhow, bail};
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// A 6-byte link-layer address identifying a peer station
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MacAddr(pub [u8; 6]);

impl MacAddr {
    pub const fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }
}

impl Display for MacAddr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

impl Debug for MacAddr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl FromStr for MacAddr {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(anyhow!("empty string"));
        }

        let mut octets = [0; 6];
        let mut parts = s.split(':');
        for (i, octet) in octets.iter_mut().enumerate() {
            let part = parts
                .next()
                .ok_or(anyhow!("mac address has only {i} octets, expected 6"))?;
            if part.len() != 2 {
                bail!("mac address octet `{part}` must be exactly two hex digits");
            }

            *octet = u8::from_str_radix(part, 16)
                .with_context(|| format!("invalid hex octet `{part}` in mac address"))?;
        }

        if parts.next().is_some() {
            bail!("mac address contains trailing characters");
        }

        Ok(Self(octets))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let addr: MacAddr = "02:00:5E:10:00:ff".parse().unwrap();
        assert_eq!(addr, MacAddr::new([0x02, 0x00, 0x5e, 0x10, 0x00, 0xff]));
        assert_eq!(addr.to_string(), "02:00:5e:10:00:ff");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in ["", "02:00:5e:10:00", "02:00:5e:10:00:ff:01", "2:00:5e:10:00:ff", "zz:00:5e:10:00:ff"] {
            assert!(input.parse::<MacAddr>().is_err(), "{input}");
        }
    }
}
