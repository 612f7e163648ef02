//! Searching a café list the way the discovery app does: users type without
//! tone marks, names are stored with them.

use khongdau::{MatchKind, Matcher, canonicalize};

struct Cafe {
    name: &'static str,
    district: &'static str,
}

const CAFES: &[Cafe] = &[
    Cafe { name: "Cộng Cà Phê", district: "Hai Bà Trưng" },
    Cafe { name: "Cà Phê Giảng", district: "Hoàn Kiếm" },
    Cafe { name: "The Workshop", district: "Quận 1" },
    Cafe { name: "Cà Phê Muối Chú Long", district: "Hải Châu, Đà Nẵng" },
    Cafe { name: "Résumé Bar", district: "Tây Hồ" },
];

fn main() {
    for name in ["Hai Bà Trưng", "Đà Nẵng", "CAFÉ"] {
        println!("{name:>14} → {}", canonicalize(name));
    }
    println!();

    let matcher = Matcher::default();

    for query in ["ca phe", "da nang", "résumé", "hoan kiem"] {
        let by_name: Vec<_> = matcher.filter(CAFES, query, |c| c.name).map(|c| c.name).collect();
        let by_district: Vec<_> = matcher
            .filter(CAFES, query, |c| c.district)
            .map(|c| c.name)
            .collect();
        println!("query `{query}`");
        println!("  by name    : {by_name:?}");
        println!("  by district: {by_district:?}");
    }
    println!();

    for (target, query) in [("Résumé Bar", "résumé"), ("Cộng Cà Phê", "cong")] {
        let kind = matcher.find(target, query);
        let how = kind.map_or("no match".to_string(), |k: MatchKind| k.to_string());
        println!("`{query}` in `{target}`: {how}");
    }
}
