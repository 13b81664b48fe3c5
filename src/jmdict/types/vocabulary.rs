//! The five closed classification vocabularies used by JMdict.
//!
//! The corpus writes these codes as undeclared entity references (`&n;`,
//! `&v5k;`, ...) or as literal element text. Each vocabulary is a closed
//! enumeration: a token that does not map to a variant is rejected by the
//! decoder instead of being passed through.
//!
//! The tables cover the current JMdict entity set plus a few older codes
//! (`obsc`, `oik`, `uK`) that still show up in archived releases.

use std::fmt;
use std::str::FromStr;

use super::error::UnknownCodeError;

/// Behaviour shared by every classification vocabulary.
///
/// Used by the entity registry to enumerate all codes and by the decoder to
/// validate tokens generically.
pub trait Vocabulary: Sized + Copy + 'static {
    /// Human-readable name of the vocabulary, used in error messages.
    const FIELD: &'static str;
    /// Every member, in table order.
    const ALL: &'static [Self];

    fn code(self) -> &'static str;
    fn description(self) -> &'static str;
    fn from_code(code: &str) -> Option<Self>;
}

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident($field:literal), $describe:ident {
            $( $variant:ident => $code:literal, $desc:literal; )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $(
                #[doc = $desc]
                #[cfg_attr(feature = "serde", serde(rename = $code))]
                $variant,
            )+
        }

        impl $name {
            /// The short code as written in the corpus.
            pub const fn code(self) -> &'static str {
                match self {
                    $( $name::$variant => $code, )+
                }
            }

            /// The fixed human-readable description of this code.
            pub const fn description(self) -> &'static str {
                match self {
                    $( $name::$variant => $desc, )+
                }
            }

            /// Looks up a code; `None` if it is not part of this vocabulary.
            pub fn from_code(code: &str) -> Option<Self> {
                match code {
                    $( $code => Some($name::$variant), )+
                    _ => None,
                }
            }
        }

        impl Vocabulary for $name {
            const FIELD: &'static str = $field;
            const ALL: &'static [Self] = &[$( $name::$variant, )+];

            fn code(self) -> &'static str {
                $name::code(self)
            }

            fn description(self) -> &'static str {
                $name::description(self)
            }

            fn from_code(code: &str) -> Option<Self> {
                $name::from_code(code)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.code())
            }
        }

        impl FromStr for $name {
            type Err = UnknownCodeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::from_code(s).ok_or_else(|| UnknownCodeError {
                    field: $field,
                    token: s.to_string(),
                })
            }
        }

        #[doc = concat!("Describes a ", $field, " code; `None` if the code is not in the vocabulary.")]
        pub fn $describe(code: &str) -> Option<&'static str> {
            $name::from_code(code).map($name::description)
        }
    };
}

vocabulary! {
    /// Part-of-speech codes (`<pos>`).
    PartOfSpeech("part-of-speech"), describe_part_of_speech {
        AdjF => "adj-f", "noun or verb acting prenominally";
        AdjI => "adj-i", "adjective (keiyoushi)";
        AdjIx => "adj-ix", "adjective (keiyoushi) - yoi/ii class";
        AdjKari => "adj-kari", "'kari' adjective (archaic)";
        AdjKu => "adj-ku", "'ku' adjective (archaic)";
        AdjNa => "adj-na", "adjectival nouns or quasi-adjectives (keiyodoshi)";
        AdjNari => "adj-nari", "archaic/formal form of na-adjective";
        AdjNo => "adj-no", "nouns which may take the genitive case particle 'no'";
        AdjPn => "adj-pn", "pre-noun adjectival (rentaishi)";
        AdjShiku => "adj-shiku", "'shiku' adjective (archaic)";
        AdjT => "adj-t", "'taru' adjective";
        Adv => "adv", "adverb (fukushi)";
        AdvTo => "adv-to", "adverb taking the 'to' particle";
        Aux => "aux", "auxiliary";
        AuxAdj => "aux-adj", "auxiliary adjective";
        AuxV => "aux-v", "auxiliary verb";
        Conj => "conj", "conjunction";
        Cop => "cop", "copula";
        Ctr => "ctr", "counter";
        Exp => "exp", "expressions (phrases, clauses, etc.)";
        Int => "int", "interjection (kandoushi)";
        N => "n", "noun (common) (futsuumeishi)";
        NAdv => "n-adv", "adverbial noun (fukushitekimeishi)";
        NPr => "n-pr", "proper noun";
        NPref => "n-pref", "noun, used as a prefix";
        NSuf => "n-suf", "noun, used as a suffix";
        NT => "n-t", "noun (temporal) (jisoumeishi)";
        Num => "num", "numeric";
        Pn => "pn", "pronoun";
        Pref => "pref", "prefix";
        Prt => "prt", "particle";
        Suf => "suf", "suffix";
        Unc => "unc", "unclassified";
        VUnspec => "v-unspec", "verb unspecified";
        V1 => "v1", "Ichidan verb";
        V1S => "v1-s", "Ichidan verb - kureru special class";
        V2aS => "v2a-s", "Nidan verb with 'u' ending (archaic)";
        V2bK => "v2b-k", "Nidan verb (upper class) with 'bu' ending (archaic)";
        V2bS => "v2b-s", "Nidan verb (lower class) with 'bu' ending (archaic)";
        V2dK => "v2d-k", "Nidan verb (upper class) with 'dzu' ending (archaic)";
        V2dS => "v2d-s", "Nidan verb (lower class) with 'dzu' ending (archaic)";
        V2gK => "v2g-k", "Nidan verb (upper class) with 'gu' ending (archaic)";
        V2gS => "v2g-s", "Nidan verb (lower class) with 'gu' ending (archaic)";
        V2hK => "v2h-k", "Nidan verb (upper class) with 'hu/fu' ending (archaic)";
        V2hS => "v2h-s", "Nidan verb (lower class) with 'hu/fu' ending (archaic)";
        V2kK => "v2k-k", "Nidan verb (upper class) with 'ku' ending (archaic)";
        V2kS => "v2k-s", "Nidan verb (lower class) with 'ku' ending (archaic)";
        V2mK => "v2m-k", "Nidan verb (upper class) with 'mu' ending (archaic)";
        V2mS => "v2m-s", "Nidan verb (lower class) with 'mu' ending (archaic)";
        V2nS => "v2n-s", "Nidan verb (lower class) with 'nu' ending (archaic)";
        V2rK => "v2r-k", "Nidan verb (upper class) with 'ru' ending (archaic)";
        V2rS => "v2r-s", "Nidan verb (lower class) with 'ru' ending (archaic)";
        V2sS => "v2s-s", "Nidan verb (lower class) with 'su' ending (archaic)";
        V2tK => "v2t-k", "Nidan verb (upper class) with 'tsu' ending (archaic)";
        V2tS => "v2t-s", "Nidan verb (lower class) with 'tsu' ending (archaic)";
        V2wS => "v2w-s", "Nidan verb (lower class) with 'u' ending and 'we' conjugation (archaic)";
        V2yK => "v2y-k", "Nidan verb (upper class) with 'yu' ending (archaic)";
        V2yS => "v2y-s", "Nidan verb (lower class) with 'yu' ending (archaic)";
        V2zS => "v2z-s", "Nidan verb (lower class) with 'zu' ending (archaic)";
        V4b => "v4b", "Yodan verb with 'bu' ending (archaic)";
        V4g => "v4g", "Yodan verb with 'gu' ending (archaic)";
        V4h => "v4h", "Yodan verb with 'hu/fu' ending (archaic)";
        V4k => "v4k", "Yodan verb with 'ku' ending (archaic)";
        V4m => "v4m", "Yodan verb with 'mu' ending (archaic)";
        V4n => "v4n", "Yodan verb with 'nu' ending (archaic)";
        V4r => "v4r", "Yodan verb with 'ru' ending (archaic)";
        V4s => "v4s", "Yodan verb with 'su' ending (archaic)";
        V4t => "v4t", "Yodan verb with 'tsu' ending (archaic)";
        V5aru => "v5aru", "Godan verb - -aru special class";
        V5b => "v5b", "Godan verb with 'bu' ending";
        V5g => "v5g", "Godan verb with 'gu' ending";
        V5k => "v5k", "Godan verb with 'ku' ending";
        V5kS => "v5k-s", "Godan verb - Iku/Yuku special class";
        V5m => "v5m", "Godan verb with 'mu' ending";
        V5n => "v5n", "Godan verb with 'nu' ending";
        V5r => "v5r", "Godan verb with 'ru' ending";
        V5rI => "v5r-i", "Godan verb with 'ru' ending (irregular verb)";
        V5s => "v5s", "Godan verb with 'su' ending";
        V5t => "v5t", "Godan verb with 'tsu' ending";
        V5u => "v5u", "Godan verb with 'u' ending";
        V5uS => "v5u-s", "Godan verb with 'u' ending (special class)";
        V5uru => "v5uru", "Godan verb - Uru old class verb (old form of Eru)";
        Vi => "vi", "intransitive verb";
        Vk => "vk", "Kuru verb - special class";
        Vn => "vn", "irregular nu verb";
        Vr => "vr", "irregular ru verb, plain form ends with -ri";
        Vs => "vs", "noun or participle which takes the aux. verb suru";
        VsC => "vs-c", "su verb - precursor to the modern suru";
        VsI => "vs-i", "suru verb - included";
        VsS => "vs-s", "suru verb - special class";
        Vt => "vt", "transitive verb";
        Vz => "vz", "Ichidan verb - zuru verb (alternative form of -jiru verbs)";
    }
}

vocabulary! {
    /// Field-of-application codes (`<field>`).
    Field("field"), describe_field {
        Agric => "agric", "agriculture";
        Anat => "anat", "anatomy";
        Archeol => "archeol", "archeology";
        Archit => "archit", "architecture";
        Art => "art", "art, aesthetics";
        Astron => "astron", "astronomy";
        Audvid => "audvid", "audiovisual";
        Aviat => "aviat", "aviation";
        Baseb => "baseb", "baseball";
        Biochem => "biochem", "biochemistry";
        Biol => "biol", "biology";
        Bot => "bot", "botany";
        Boxing => "boxing", "boxing";
        Buddh => "Buddh", "Buddhism";
        Bus => "bus", "business";
        Cards => "cards", "card games";
        Chem => "chem", "chemistry";
        Chmyth => "chmyth", "Chinese mythology";
        Christn => "Christn", "Christianity";
        Civeng => "civeng", "civil engineering";
        Cloth => "cloth", "clothing";
        Comp => "comp", "computing";
        Cryst => "cryst", "crystallography";
        Dent => "dent", "dentistry";
        Ecol => "ecol", "ecology";
        Econ => "econ", "economics";
        Elec => "elec", "electricity, elec. eng.";
        Electr => "electr", "electronics";
        Embryo => "embryo", "embryology";
        Engr => "engr", "engineering";
        Ent => "ent", "entomology";
        Figskt => "figskt", "figure skating";
        Film => "film", "film";
        Finc => "finc", "finance";
        Fish => "fish", "fishing";
        Food => "food", "food, cooking";
        Gardn => "gardn", "gardening, horticulture";
        Genet => "genet", "genetics";
        Geogr => "geogr", "geography";
        Geol => "geol", "geology";
        Geom => "geom", "geometry";
        Go => "go", "go (game)";
        Golf => "golf", "golf";
        Gramm => "gramm", "grammar";
        Grmyth => "grmyth", "Greek mythology";
        Hanaf => "hanaf", "hanafuda";
        Horse => "horse", "horse racing";
        Internet => "internet", "Internet";
        Jpmyth => "jpmyth", "Japanese mythology";
        Kabuki => "kabuki", "kabuki";
        Law => "law", "law";
        Ling => "ling", "linguistics";
        Logic => "logic", "logic";
        MA => "MA", "martial arts";
        Mahj => "mahj", "mahjong";
        Manga => "manga", "manga";
        Math => "math", "mathematics";
        Mech => "mech", "mechanical engineering";
        Med => "med", "medicine";
        Met => "met", "meteorology";
        Mil => "mil", "military";
        Mining => "mining", "mining";
        Motor => "motor", "motorsport";
        Music => "music", "music";
        Noh => "noh", "noh";
        Ornith => "ornith", "ornithology";
        Paleo => "paleo", "paleontology";
        Pathol => "pathol", "pathology";
        Pharm => "pharm", "pharmacology";
        Phil => "phil", "philosophy";
        Photo => "photo", "photography";
        Physics => "physics", "physics";
        Physiol => "physiol", "physiology";
        Politics => "politics", "politics";
        Print => "print", "printing";
        Prowres => "prowres", "professional wrestling";
        Psy => "psy", "psychiatry";
        Psyanal => "psyanal", "psychoanalysis";
        Psych => "psych", "psychology";
        Rail => "rail", "railway";
        Rommyth => "rommyth", "Roman mythology";
        Shinto => "Shinto", "Shinto";
        Shogi => "shogi", "shogi";
        Ski => "ski", "skiing";
        Sports => "sports", "sports";
        Stat => "stat", "statistics";
        Stockm => "stockm", "stock market";
        Sumo => "sumo", "sumo";
        Surg => "surg", "surgery";
        Telec => "telec", "telecommunications";
        Tradem => "tradem", "trademark";
        Tv => "tv", "television";
        Vet => "vet", "veterinary terms";
        Vidg => "vidg", "video games";
        Zool => "zool", "zoology";
    }
}

vocabulary! {
    /// Register and miscellaneous usage codes (`<misc>`).
    Misc("misc"), describe_misc {
        Abbr => "abbr", "abbreviation";
        Arch => "arch", "archaic";
        Char => "char", "character";
        Chn => "chn", "children's language";
        Col => "col", "colloquial";
        Company => "company", "company name";
        Creat => "creat", "creature";
        Dated => "dated", "dated term";
        Dei => "dei", "deity";
        Derog => "derog", "derogatory";
        Doc => "doc", "document";
        Euph => "euph", "euphemistic";
        Ev => "ev", "event";
        Fam => "fam", "familiar language";
        Fem => "fem", "female term or language";
        Fict => "fict", "fiction";
        Form => "form", "formal or literary term";
        Given => "given", "given name or forename, gender not specified";
        Group => "group", "group";
        Hist => "hist", "historical term";
        Hon => "hon", "honorific or respectful (sonkeigo) language";
        Hum => "hum", "humble (kenjougo) language";
        Id => "id", "idiomatic expression";
        Joc => "joc", "jocular, humorous term";
        Leg => "leg", "legend";
        MSl => "m-sl", "manga slang";
        Male => "male", "male term or language";
        Myth => "myth", "mythology";
        NetSl => "net-sl", "Internet slang";
        Obj => "obj", "object";
        Obs => "obs", "obsolete term";
        Obsc => "obsc", "obscure term";
        OnMim => "on-mim", "onomatopoeic or mimetic word";
        Organization => "organization", "organization name";
        Oth => "oth", "other";
        Person => "person", "full name of a particular person";
        Place => "place", "place name";
        Poet => "poet", "poetical term";
        Pol => "pol", "polite (teineigo) language";
        Product => "product", "product name";
        Proverb => "proverb", "proverb";
        Quote => "quote", "quotation";
        Rare => "rare", "rare term";
        Relig => "relig", "religion";
        Sens => "sens", "sensitive";
        Serv => "serv", "service";
        Ship => "ship", "ship name";
        Sl => "sl", "slang";
        Station => "station", "railway station";
        Surname => "surname", "family or surname";
        Uk => "uk", "word usually written using kana alone";
        Unclass => "unclass", "unclassified name";
        Vulg => "vulg", "vulgar expression or word";
        Work => "work", "work of art, literature, music, etc. name";
        X => "X", "rude or X-rated term (not displayed in educational software)";
        Yoji => "yoji", "yojijukugo";
    }
}

vocabulary! {
    /// Regional dialect codes (`<dial>`).
    Dialect("dialect"), describe_dialect {
        Brazilian => "bra", "Brazilian";
        HokkaidoBen => "hob", "Hokkaido-ben";
        KansaiBen => "ksb", "Kansai-ben";
        KantouBen => "ktb", "Kantou-ben";
        KyotoBen => "kyb", "Kyoto-ben";
        KyuushuuBen => "kyu", "Kyuushuu-ben";
        NaganoBen => "nab", "Nagano-ben";
        OsakaBen => "osb", "Osaka-ben";
        RyuukyuuBen => "rkb", "Ryuukyuu-ben";
        TouhokuBen => "thb", "Touhoku-ben";
        TosaBen => "tsb", "Tosa-ben";
        TsugaruBen => "tsug", "Tsugaru-ben";
    }
}

vocabulary! {
    /// Orthography annotations on kanji and reading forms (`<ke_inf>`, `<re_inf>`).
    ///
    /// Typically flags something unusual about the written form, such as
    /// irregular okurigana or an out-dated kanji.
    Orthography("orthography"), describe_orthography {
        Ateji => "ateji", "ateji (phonetic) reading";
        IrregularKana => "ik", "word containing irregular kana usage";
        IrregularKanji => "iK", "word containing irregular kanji usage";
        IrregularOkurigana => "io", "irregular okurigana usage";
        OutdatedKanji => "oK", "word containing out-dated kanji or kanji usage";
        RareKanji => "rK", "rarely-used kanji form";
        RareKana => "rk", "rarely used kana form";
        SearchOnlyKanji => "sK", "search-only kanji form";
        Gikun => "gikun", "gikun (meaning as reading) or jukujikun (special kanji reading)";
        OutdatedKana => "ok", "out-dated or obsolete kana usage";
        SearchOnlyKana => "sk", "search-only kana form";
        OldOrIrregularKana => "oik", "old or irregular kana form";
        KanjiAlone => "uK", "word usually written using kanji alone";
    }
}
