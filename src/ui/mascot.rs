use crate::models::Mascot;

/// Three-line portrait for each mascot.
pub(crate) fn art(mascot: Mascot) -> [&'static str; 3] {
    match mascot {
        Mascot::Bunny => [r"(\_/)", r"( •.•)", r"/ >🥕"],
        Mascot::Bear => [r"ʕ•ᴥ•ʔ", r"/ づ ♡", r"(___)"],
        Mascot::Fox => [r"/\_/\", r"(=^.^=)", r" ) 🎉("],
        Mascot::Cat => [r"/\_/\", r"( o.o )", r" > ^ <"],
    }
}

pub(crate) fn name(mascot: Mascot) -> &'static str {
    match mascot {
        Mascot::Bunny => "Bunny",
        Mascot::Bear => "Bear",
        Mascot::Fox => "Fox",
        Mascot::Cat => "Cat",
    }
}
