use radar::{Attributes, Policy};

fn main() {
    let policy = Policy::from_rules(
        Some("amount < 100"),
        Some("card_country != ip_country OR amount > 100"),
    );

    let attrs = Attributes::new()
        .set("card_country", "US")
        .set("currency", "USD")
        .set("amount", "90")
        .set("ip_country", "CA");

    let report = policy.evaluate_detailed(&attrs);

    println!("{report}");
    println!();
    println!("Allow rule matched: {}", report.allowed());
    println!("Block rule matched: {}", report.blocked());
    println!("Duration: {:?}", report.duration());
}
