use topicmatch::{Lowercase, RuleChecker, TermPresence, evaluate, parse};

fn main() {
    let text = "The centre of CityA hosted an event yesterday.";
    let checker = RuleChecker::new(Lowercase);

    // One rule at a time
    let rule = "centre AND (CityA OR CityB) AND NOT CityC";
    match checker.check(text, rule) {
        Ok(matched) => println!("{rule} => {matched}"),
        Err(e) => println!("{rule} => error: {e}"),
    }

    // Parse once, evaluate against a hand-built term table
    let postfix = parse("event AND NOT concert").expect("rule should parse");
    println!("postfix: {postfix}");
    let presence = TermPresence::new().set("event", true);
    println!("evaluates to {:?}", evaluate(&postfix, &presence));

    // A batch, with one malformed rule
    let rules = ["centre", "centre CityA", "yesterday OR tomorrow"];
    for report in checker.check_all(text, &rules) {
        println!("{report}");
    }
}
