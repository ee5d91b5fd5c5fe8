use cowsay::{CowLibrary, Cowsay, Mood, DEFAULT_COW};

fn main() -> cowsay::Result<()> {
    let cow = CowLibrary::new().load(DEFAULT_COW)?;

    for mood in Mood::ALL {
        let out = Cowsay::new()
            .with_mood(Some(mood.letter()))
            .render(&cow, &format!("-{}: feeling {}", mood.letter(), mood.name()))?;
        println!("{out}");
    }

    // Thought bubble without wrapping
    let out = Cowsay::think()
        .with_wrap(0)
        .render(&cow, "first line\nsecond, somewhat longer line")?;
    println!("{out}");
    Ok(())
}
