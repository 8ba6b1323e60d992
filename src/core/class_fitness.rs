//! Class and fitness points
//!
//! Additive points for official rating, course/distance wins, prime age and
//! race grade. Each bucket is independent; the total is capped at 12.

pub const MAX_CLASS_FITNESS: u8 = 12;

fn rating_points(official_rating: i32) -> u8 {
    match official_rating {
        r if r >= 100 => 5,
        r if r >= 90 => 4,
        r if r >= 80 => 3,
        r if r >= 70 => 2,
        r if r >= 60 => 1,
        _ => 0,
    }
}

/// Points for course ("C") and distance ("D") winner markers
fn marker_points(cd_markers: &str) -> u8 {
    if cd_markers.is_empty() {
        return 0;
    }

    let markers = cd_markers.to_uppercase();
    let cd_count = markers.chars().filter(|&c| c == 'C' || c == 'D').count();

    if markers.contains("CD") {
        3
    } else if cd_count >= 2 {
        2
    } else if cd_count == 1 {
        1
    } else {
        0
    }
}

fn age_points(age: i32) -> u8 {
    if (4..=6).contains(&age) {
        1
    } else {
        0
    }
}

fn class_points(class_label: &str) -> u8 {
    let label = class_label.to_lowercase();
    if label.contains("group") {
        2
    } else if label.contains("listed") {
        1
    } else {
        0
    }
}

/// Calculate class/fitness points (0-12)
///
/// # Examples
/// ```
/// use racecard::core::class_fitness::class_fitness;
/// // 4 (rating) + 3 (CD) + 1 (age 5) + 2 (group)
/// assert_eq!(class_fitness(95, "CD", 5, "Group 1"), 10);
/// ```
pub fn class_fitness(official_rating: i32, cd_markers: &str, age: i32, class_label: &str) -> u8 {
    let points = rating_points(official_rating)
        + marker_points(cd_markers)
        + age_points(age)
        + class_points(class_label);

    points.min(MAX_CLASS_FITNESS)
}
