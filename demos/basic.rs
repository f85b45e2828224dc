use radar::{Charge, Policy, attr};

fn main() {
    // From directives, as a payment processor would receive them
    let charge = Charge::from_directives([
        "CHARGE: card_country=US&currency=USD&amount=90&ip_country=CA",
        "ALLOW: amount < 100",
        "BLOCK: card_country != ip_country AND amount > 100",
    ])
    .expect("failed to read directives");

    println!("{}", charge.policy());
    println!("Result: {} ({})", charge.decide(), charge.decide().code());

    // The same policy built in code
    let policy = Policy::builder()
        .allow(attr("amount").lt("100"))
        .block(attr("card_country").ne("ip_country").and(attr("amount").gt("100")))
        .build();

    println!("Builder result: {}", policy.evaluate(charge.attributes()));
}
