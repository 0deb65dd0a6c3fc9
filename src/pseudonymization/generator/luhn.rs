//! Luhn (mod 10) checksum

/// Check digit for `payload` digits (each `0..=9`)
///
/// The rightmost payload digit is doubled first, since the check digit will
/// take the rightmost position.
pub fn check_digit(payload: &[u8]) -> u8 {
    let sum: u32 = payload
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            let d = u32::from(d);
            if i % 2 == 0 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// Whether `number` passes the Luhn check, ignoring spaces and hyphens
pub fn is_valid(number: &str) -> bool {
    let mut digits = Vec::with_capacity(number.len());
    for c in number.chars() {
        match c {
            ' ' | '-' => continue,
            _ => match c.to_digit(10) {
                Some(d) => digits.push(d as u8),
                None => return false,
            },
        }
    }

    match digits.split_last() {
        Some((&last, payload)) if !payload.is_empty() => check_digit(payload) == last,
        _ => false,
    }
}
