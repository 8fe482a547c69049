use std::collections::HashSet;
use uuid::Uuid;

/// URL-safe alphabet used for node uids
const ALPHABET: &[u8; 64] = b"_-0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of every generated uid
pub const UID_LEN: usize = 9;

/// Hands out random node uids, never repeating one within a run
#[derive(Debug, Default)]
pub struct UidGenerator {
    issued: HashSet<String>,
}

impl UidGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw a fresh uid that has not been issued by this generator before
    pub fn next_uid(&mut self) -> String {
        loop {
            let uid = random_uid();
            if self.issued.insert(uid.clone()) {
                return uid;
            }
            tracing::debug!("uid collision on {}, redrawing", uid);
        }
    }

    /// Number of uids issued so far
    pub fn issued(&self) -> usize {
        self.issued.len()
    }
}

/// Bytes of a v4 uuid whose low 6 bits are fully random (byte 6 holds the version)
const RANDOM_BYTES: [usize; UID_LEN] = [0, 1, 2, 3, 4, 5, 7, 8, 9];

/// 9 symbols of 6 bits each, taken from a v4 uuid's random bytes
fn random_uid() -> String {
    let bytes = Uuid::new_v4().into_bytes();
    RANDOM_BYTES
        .iter()
        .map(|&i| ALPHABET[(bytes[i] & 0x3f) as usize] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uid_shape() {
        let mut uids = UidGenerator::new();
        let uid = uids.next_uid();
        assert_eq!(uid.len(), UID_LEN);
        assert!(uid.bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn test_uids_are_unique() {
        let mut uids = UidGenerator::new();
        let drawn: HashSet<String> = (0..5000).map(|_| uids.next_uid()).collect();
        assert_eq!(drawn.len(), 5000);
        assert_eq!(uids.issued(), 5000);
    }
}
