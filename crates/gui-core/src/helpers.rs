// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Those things used across the Range Timeline GUI crate
//!

/// The length of a `YYYY-MM-DD` date
const ISO_DATE_LEN: usize = 10;

/// Alter the string that's passed in so that it could be (the start of) a
/// `YYYY-MM-DD` date.  All chars other than ASCII digits and `-` are removed,
/// and it's cut to 10 chars.
///
/// It doesn't check that the result is a real date.
pub fn conform_string_input_to_iso_date(str: &mut String) {
    let filtered_str: String = str
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .take(ISO_DATE_LEN)
        .collect();
    if *str != filtered_str {
        trace!("Conformed date input {str:?} to {filtered_str:?}");
        *str = filtered_str;
    }
}
