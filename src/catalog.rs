//! Static content catalog.
//!
//! Every mood maps to exactly one canned entry. The table is plain static
//! data; `lookup` turns an entry into an owned bundle.

use crate::models::{ContentBundle, MoodKey, Song};

struct Entry {
    quote: &'static str,
    affirmation: &'static str,
    songs: &'static [(&'static str, &'static str)],
    background_image: &'static str,
}

impl Entry {
    fn to_bundle(&self) -> ContentBundle {
        ContentBundle {
            quote: self.quote.to_string(),
            affirmation: self.affirmation.to_string(),
            songs: self
                .songs
                .iter()
                .map(|(title, artist)| Song::new(title, artist))
                .collect(),
            background_image: Some(self.background_image.to_string()),
        }
    }
}

static HAPPY: Entry = Entry {
    quote: "Happiness is not something ready-made. It comes from your own actions.",
    affirmation: "I choose to be happy and spread joy to those around me.",
    songs: &[
        ("Happy", "Pharrell Williams"),
        ("Good as Hell", "Lizzo"),
        ("Walking on Sunshine", "Katrina & The Waves"),
    ],
    background_image: "https://images.unsplash.com/photo-1465146344425-f00d5f5c8f07?q=80&w=2076&auto=format&fit=crop",
};

static SAD: Entry = Entry {
    quote: "Tears are words that need to be written.",
    affirmation: "I honor my feelings but do not let them define me. This too shall pass.",
    songs: &[
        ("Someone Like You", "Adele"),
        ("Fix You", "Coldplay"),
        ("Everybody Hurts", "R.E.M."),
    ],
    background_image: "https://images.unsplash.com/photo-1470813740244-df37b8c1edcb?q=80&w=2151&auto=format&fit=crop",
};

static CHILL: Entry = Entry {
    quote: "Life isn't as serious as the mind makes it out to be.",
    affirmation: "I am present and at peace with this moment exactly as it is.",
    songs: &[
        ("Sunday Morning", "Maroon 5"),
        ("Breathe", "Télépopmusik"),
        ("Flightless Bird, American Mouth", "Iron & Wine"),
    ],
    background_image: "https://images.unsplash.com/photo-1500673922987-e212871fec22?q=80&w=2070&auto=format&fit=crop",
};

static ANGRY: Entry = Entry {
    quote: "Speak when you are angry and you will make the best speech you will ever regret.",
    affirmation: "I release my anger and choose responses that serve my highest good.",
    songs: &[
        ("Break Stuff", "Limp Bizkit"),
        ("Killing In The Name", "Rage Against The Machine"),
        ("Wake Up", "Arcade Fire"),
    ],
    background_image: "https://images.unsplash.com/photo-1439792675105-701e6a4ab6f0?q=80&w=2073&auto=format&fit=crop",
};

static EXCITED: Entry = Entry {
    quote: "The future belongs to those who believe in the beauty of their dreams.",
    affirmation: "I embrace the energy of possibility and opportunity all around me.",
    songs: &[
        ("Can't Stop the Feeling!", "Justin Timberlake"),
        ("Uptown Funk", "Mark Ronson ft. Bruno Mars"),
        ("Good Time", "Owl City & Carly Rae Jepsen"),
    ],
    background_image: "https://images.unsplash.com/photo-1492684223066-81342ee5ff30?q=80&w=2070&auto=format&fit=crop",
};

static LONELY: Entry = Entry {
    quote: "Sometimes you need to be alone to reflect on life. Take time to take care of yourself.",
    affirmation: "I am complete within myself. Solitude offers me space to grow and reflect.",
    songs: &[
        ("Lonely", "Justin Bieber & benny blanco"),
        ("All By Myself", "Céline Dion"),
        ("Dancing On My Own", "Robyn"),
    ],
    background_image: "https://images.unsplash.com/photo-1500375592092-40eb2168fd21?q=80&w=2073&auto=format&fit=crop",
};

fn entry(mood: MoodKey) -> &'static Entry {
    match mood {
        MoodKey::Happy => &HAPPY,
        MoodKey::Sad => &SAD,
        MoodKey::Chill => &CHILL,
        MoodKey::Angry => &ANGRY,
        MoodKey::Excited => &EXCITED,
        MoodKey::Lonely => &LONELY,
    }
}

/// Look up the bundle for a mood
pub fn lookup(mood: MoodKey) -> ContentBundle {
    entry(mood).to_bundle()
}
