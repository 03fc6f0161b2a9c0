use tm35fin_rs::{MapSheet, Tm35Error};

fn main() -> Result<(), Tm35Error> {
    // A point in central Turku, ETRS-TM35FIN meters.
    let easting = 239645.0;
    let northing = 6712052.0;

    let sheet = MapSheet::from_xy(&(easting, northing), 9)?;

    println!("Sheet: {}", sheet.name);
    println!("Lower left: ({}, {})", sheet.easting(), sheet.northing());
    println!("Size: {:?} m", sheet.size());
    println!("WKT: {}", sheet.to_wkt());

    println!("Ancestor chain:");
    for ancestor in sheet.ancestors()? {
        let scale = match ancestor.scale_denominator() {
            Some(s) => format!("1:{}000", s),
            None => "-".to_string(),
        };
        println!("  level {} {:<7} {}", ancestor.level, ancestor.name, scale);
    }

    Ok(())
}
