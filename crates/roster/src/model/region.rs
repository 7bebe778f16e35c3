//! Region names offered by the state picker.

/// States and union territories of India, in picker order.
pub const REGIONS: &[&str] = &[
    "Andaman and Nicobar Islands",
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chandigarh",
    "Chhattisgarh",
    "Dadra and Nagar Haveli and Daman and Diu",
    "Delhi",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jammu and Kashmir",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Ladakh",
    "Lakshadweep",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Puducherry",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
];

/// Check whether `name` is one of the known regions.
#[must_use]
pub fn is_known_region(name: &str) -> bool {
    REGIONS.contains(&name)
}

/// Resolve operator input to a canonical region name, ignoring case.
#[must_use]
pub fn find_region(input: &str) -> Option<&'static str> {
    let wanted = input.trim();
    REGIONS
        .iter()
        .copied()
        .find(|region| region.eq_ignore_ascii_case(wanted))
}
