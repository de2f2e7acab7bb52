//! Fixed character pool.
//!
//! Insertion order defines the index-to-entry mapping the matcher hashes
//! into, and must never be reordered: reordering silently remaps every
//! visitor's character between builds. Adding or removing entries changes
//! the modulus and is an accepted tradeoff, not a correctness bug.

/// Perceived gender category attached to a pool entry, used to steer the
/// caption pronoun when the service's person analysis is unavailable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Neutral,
}

/// One entry of the character pool. `theme` is an opaque styling token
/// consumed by presentation layers; the matcher never interprets it.
#[derive(Clone, Copy, Debug)]
pub struct CharacterEntry {
    pub name: &'static str,
    pub theme: &'static str,
    pub gender: Gender,
}

/// The fixed, ordered pool the matcher selects from. Never empty.
pub const CHARACTERS: &[CharacterEntry] = &[
    CharacterEntry { name: "Mickey Mouse", theme: "from-red-500 to-yellow-400", gender: Gender::Male },
    CharacterEntry { name: "SpongeBob SquarePants", theme: "from-yellow-300 to-green-400", gender: Gender::Male },
    CharacterEntry { name: "Bugs Bunny", theme: "from-gray-400 to-pink-400", gender: Gender::Male },
    CharacterEntry { name: "Homer Simpson", theme: "from-yellow-400 to-blue-500", gender: Gender::Male },
    CharacterEntry { name: "Popeye the Sailor", theme: "from-blue-700 to-white", gender: Gender::Male },
    CharacterEntry { name: "Scooby-Doo", theme: "from-yellow-600 to-blue-400", gender: Gender::Male },
    CharacterEntry { name: "Tom Cat", theme: "from-gray-500 to-gray-700", gender: Gender::Male },
    CharacterEntry { name: "Jerry Mouse", theme: "from-yellow-700 to-yellow-500", gender: Gender::Male },
    CharacterEntry { name: "Daffy Duck", theme: "from-black to-green-500", gender: Gender::Male },
    CharacterEntry { name: "Fred Flintstone", theme: "from-orange-500 to-blue-300", gender: Gender::Male },
    CharacterEntry { name: "Goofy", theme: "from-orange-400 to-green-500", gender: Gender::Male },
    CharacterEntry { name: "Donald Duck", theme: "from-blue-500 to-white", gender: Gender::Male },
    CharacterEntry { name: "Pikachu", theme: "from-yellow-400 to-red-500", gender: Gender::Neutral },
    CharacterEntry { name: "Winnie the Pooh", theme: "from-red-600 to-yellow-400", gender: Gender::Male },
    CharacterEntry { name: "Shrek", theme: "from-green-600 to-yellow-800", gender: Gender::Male },
    CharacterEntry { name: "Buzz Lightyear", theme: "from-purple-600 to-green-400", gender: Gender::Male },
    CharacterEntry { name: "Woody", theme: "from-yellow-500 to-blue-600", gender: Gender::Male },
    CharacterEntry { name: "Elsa", theme: "from-blue-300 to-purple-400", gender: Gender::Female },
    CharacterEntry { name: "Optimus Prime", theme: "from-red-600 to-blue-700", gender: Gender::Male },
    CharacterEntry { name: "Iron Man", theme: "from-red-700 to-yellow-500", gender: Gender::Male },
    CharacterEntry { name: "Captain America", theme: "from-blue-600 to-red-600", gender: Gender::Male },
    CharacterEntry { name: "Spider-Man", theme: "from-red-500 to-blue-500", gender: Gender::Male },
    CharacterEntry { name: "Hulk", theme: "from-green-500 to-purple-500", gender: Gender::Male },
    CharacterEntry { name: "Thor", theme: "from-gray-700 to-red-500", gender: Gender::Male },
    CharacterEntry { name: "Batman", theme: "from-black to-yellow-400", gender: Gender::Male },
    CharacterEntry { name: "Superman", theme: "from-blue-600 to-red-500", gender: Gender::Male },
    CharacterEntry { name: "Wonder Woman", theme: "from-red-600 to-yellow-400", gender: Gender::Female },
    CharacterEntry { name: "The Joker", theme: "from-purple-500 to-green-400", gender: Gender::Male },
    CharacterEntry { name: "Harley Quinn", theme: "from-red-500 to-black", gender: Gender::Female },
    CharacterEntry { name: "Bender", theme: "from-gray-600 to-yellow-200", gender: Gender::Male },
    CharacterEntry { name: "Rick Sanchez", theme: "from-blue-200 to-green-300", gender: Gender::Male },
    CharacterEntry { name: "Morty Smith", theme: "from-yellow-300 to-blue-400", gender: Gender::Male },
    CharacterEntry { name: "Stewie Griffin", theme: "from-yellow-400 to-red-500", gender: Gender::Male },
    CharacterEntry { name: "Peter Griffin", theme: "from-green-400 to-yellow-200", gender: Gender::Male },
    CharacterEntry { name: "Eric Cartman", theme: "from-red-500 to-blue-300", gender: Gender::Male },
    CharacterEntry { name: "Naruto Uzumaki", theme: "from-orange-500 to-yellow-300", gender: Gender::Male },
    CharacterEntry { name: "Goku", theme: "from-orange-600 to-blue-500", gender: Gender::Male },
    CharacterEntry { name: "Sailor Moon", theme: "from-pink-400 to-blue-400", gender: Gender::Female },
    CharacterEntry { name: "Hello Kitty", theme: "from-pink-300 to-red-400", gender: Gender::Female },
    CharacterEntry { name: "Totoro", theme: "from-gray-500 to-gray-300", gender: Gender::Male },
    CharacterEntry { name: "Stitch", theme: "from-blue-500 to-purple-400", gender: Gender::Male },
    CharacterEntry { name: "Moana", theme: "from-orange-400 to-blue-300", gender: Gender::Female },
    CharacterEntry { name: "Simba", theme: "from-yellow-600 to-orange-500", gender: Gender::Male },
    CharacterEntry { name: "Timon", theme: "from-yellow-700 to-red-600", gender: Gender::Male },
    CharacterEntry { name: "Pumbaa", theme: "from-red-800 to-yellow-600", gender: Gender::Male },
    CharacterEntry { name: "Aladdin", theme: "from-purple-500 to-yellow-200", gender: Gender::Male },
    CharacterEntry { name: "Genie", theme: "from-blue-400 to-blue-600", gender: Gender::Male },
    CharacterEntry { name: "Ariel", theme: "from-green-400 to-red-500", gender: Gender::Female },
    CharacterEntry { name: "Belle", theme: "from-yellow-400 to-orange-600", gender: Gender::Female },
    CharacterEntry { name: "Cinderella", theme: "from-blue-300 to-white", gender: Gender::Female },
    CharacterEntry { name: "Snow White", theme: "from-blue-600 to-yellow-300", gender: Gender::Female },
    CharacterEntry { name: "WALL-E", theme: "from-yellow-500 to-gray-600", gender: Gender::Male },
    CharacterEntry { name: "Mr. Incredible", theme: "from-red-600 to-black", gender: Gender::Male },
    CharacterEntry { name: "Elastigirl", theme: "from-red-500 to-orange-500", gender: Gender::Female },
    CharacterEntry { name: "Dory", theme: "from-blue-500 to-yellow-400", gender: Gender::Female },
    CharacterEntry { name: "Nemo", theme: "from-orange-500 to-white", gender: Gender::Male },
    CharacterEntry { name: "Mike Wazowski", theme: "from-green-400 to-white", gender: Gender::Male },
    CharacterEntry { name: "Sulley", theme: "from-blue-400 to-purple-400", gender: Gender::Male },
    CharacterEntry { name: "Joy", theme: "from-yellow-300 to-blue-300", gender: Gender::Female },
    CharacterEntry { name: "Sadness", theme: "from-blue-500 to-gray-400", gender: Gender::Female },
    CharacterEntry { name: "Anger", theme: "from-red-600 to-yellow-500", gender: Gender::Male },
    CharacterEntry { name: "Disgust", theme: "from-green-500 to-purple-300", gender: Gender::Female },
    CharacterEntry { name: "Fear", theme: "from-purple-500 to-pink-300", gender: Gender::Male },
    CharacterEntry { name: "Carl Fredricksen", theme: "from-gray-400 to-blue-300", gender: Gender::Male },
    CharacterEntry { name: "Minions", theme: "from-yellow-400 to-blue-500", gender: Gender::Male },
    CharacterEntry { name: "Gru", theme: "from-gray-800 to-gray-600", gender: Gender::Male },
    CharacterEntry { name: "Paddington Bear", theme: "from-blue-600 to-red-500", gender: Gender::Male },
    CharacterEntry { name: "Garfield", theme: "from-orange-500 to-black", gender: Gender::Male },
    CharacterEntry { name: "Snoopy", theme: "from-white to-black", gender: Gender::Male },
    CharacterEntry { name: "Charlie Brown", theme: "from-yellow-400 to-orange-400", gender: Gender::Male },
    CharacterEntry { name: "Finn the Human", theme: "from-blue-300 to-white", gender: Gender::Male },
    CharacterEntry { name: "Jake the Dog", theme: "from-yellow-500 to-orange-400", gender: Gender::Male },
    CharacterEntry { name: "Peppa Pig", theme: "from-pink-400 to-red-400", gender: Gender::Female },
    CharacterEntry { name: "Bluey", theme: "from-blue-400 to-blue-200", gender: Gender::Female },
    CharacterEntry { name: "Phineas", theme: "from-orange-400 to-red-500", gender: Gender::Male },
    CharacterEntry { name: "Ferb", theme: "from-green-400 to-purple-400", gender: Gender::Male },
    CharacterEntry { name: "Kim Possible", theme: "from-green-600 to-orange-500", gender: Gender::Female },
    CharacterEntry { name: "Ron Stoppable", theme: "from-orange-500 to-gray-700", gender: Gender::Male },
    CharacterEntry { name: "Powerpuff Girls", theme: "from-pink-400 to-green-400", gender: Gender::Female },
    CharacterEntry { name: "Dexter", theme: "from-white to-purple-500", gender: Gender::Male },
    CharacterEntry { name: "Johnny Bravo", theme: "from-yellow-400 to-blue-600", gender: Gender::Male },
    CharacterEntry { name: "Courage the Cowardly Dog", theme: "from-pink-300 to-black", gender: Gender::Male },
    CharacterEntry { name: "Ed, Edd n Eddy", theme: "from-yellow-300 to-green-500", gender: Gender::Male },
    CharacterEntry { name: "Samurai Jack", theme: "from-white to-red-600", gender: Gender::Male },
    CharacterEntry { name: "Aang", theme: "from-orange-300 to-blue-400", gender: Gender::Male },
    CharacterEntry { name: "Korra", theme: "from-blue-500 to-orange-400", gender: Gender::Female },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_is_never_empty() {
        assert!(!CHARACTERS.is_empty());
        assert_eq!(CHARACTERS.len(), 86);
    }

    #[test]
    fn test_pool_order_is_stable() {
        // Guards the index-to-entry mapping against accidental reordering.
        assert_eq!(CHARACTERS[0].name, "Mickey Mouse");
        assert_eq!(CHARACTERS[12].name, "Pikachu");
        assert_eq!(CHARACTERS[12].gender, Gender::Neutral);
        assert_eq!(CHARACTERS[65].name, "Gru");
        assert_eq!(CHARACTERS[85].name, "Korra");
    }
}
