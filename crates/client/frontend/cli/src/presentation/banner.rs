//! Static text shown before a match.

/// Rules overview printed before character selection.
pub const WELCOME_BANNER: &str = "\
Welcome to Magic Fight!

    Choose your sorcerer, figure out their strengths and weaknesses,
    and try to figure out how to beat everyone else!

    Any fighter - including you - loses if they take 10 units of damage.
    Different kinds of magic affect the characters in different ways, so
    pay attention.

    What kinds of magic, you ask? There are 6: dark, light, chaotic,
    ordered, hot, and cold.

    A character can likewise deal damage from one of the 6 kinds at a time.
    What kinds, and how much? You have to figure that out, too. Good luck!
";
