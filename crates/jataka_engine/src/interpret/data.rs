//! Static knowledge tables for placement interpretation.
//!
//! Generic tables carry one entry per graha per sign and per house.
//! Chart-specific override tables are sparse: most combinations have no
//! override and fall through to the generic text. All tables are process
//! constants; nothing here is written after program start.

use crate::graha::Graha;
use crate::varga::Varga;

/// Generic texts for one graha: indexed by sign/house number minus one.
pub(crate) struct GrahaTexts {
    pub graha: Graha,
    pub in_rashi: [&'static str; 12],
    pub in_bhava: [&'static str; 12],
}

pub(crate) const GRAHA_TEXTS: [GrahaTexts; 9] = [
    GrahaTexts {
        graha: Graha::Surya,
        in_rashi: [
            "Sun exalted in Aries: commanding vitality and pioneering confidence.",
            "Sun in Taurus: steady will, authority expressed through patience and property.",
            "Sun in Gemini: versatile intellect, identity built on words and ideas.",
            "Sun in Cancer: authority softened by feeling, pride tied to home and lineage.",
            "Sun in its own sign Leo: dignity, generosity and a natural seat of power.",
            "Sun in Virgo: exacting self-discipline, leadership through service and detail.",
            "Sun debilitated in Libra: confidence depends on others' approval and alliance.",
            "Sun in Scorpio: intense, secretive will that is tested through crisis.",
            "Sun in Sagittarius: righteous purpose, authority grounded in principle.",
            "Sun in Capricorn: ambition earned slowly, duty before recognition.",
            "Sun in Aquarius: impersonal authority, identity given to the collective.",
            "Sun in Pisces: diffuse ego, strength found in compassion and retreat.",
        ],
        in_bhava: [
            "Sun in the 1st: a self-defined life, health and pride rise together.",
            "Sun in the 2nd: wealth through authority; speech carries weight.",
            "Sun in the 3rd: courage and initiative, a self-made sibling of fortune.",
            "Sun in the 4th: the father shadows the home; honor through property.",
            "Sun in the 5th: bright intellect, pride in children and creation.",
            "Sun in the 6th: enemies burn away; strong recovery from illness.",
            "Sun in the 7th: a dominating partner; ego meets its mirror in marriage.",
            "Sun in the 8th: vitality tested; inheritance and hidden matters of the father.",
            "Sun in the 9th: dharma leads; fortune through father, faith and teachers.",
            "Sun in the 10th: the natural royal seat; career in full public light.",
            "Sun in the 11th: gains through rulers and elders; influential friends.",
            "Sun in the 12th: authority in distant lands; the ego learns surrender.",
        ],
    },
    GrahaTexts {
        graha: Graha::Chandra,
        in_rashi: [
            "Moon in Aries: quick feelings, an impulsive and restless heart.",
            "Moon exalted in Taurus: contentment, a settled and generous mind.",
            "Moon in Gemini: a talkative mind, moods that change with company.",
            "Moon in its own sign Cancer: deep receptivity, strong memory and mothering.",
            "Moon in Leo: warm pride, feelings that need an audience.",
            "Moon in Virgo: an anxious, careful mind that tidies its emotions.",
            "Moon in Libra: peace through partnership, moods balanced by beauty.",
            "Moon debilitated in Scorpio: emotional depth that wounds and transforms.",
            "Moon in Sagittarius: an optimistic heart, faith steadies the mood.",
            "Moon in Capricorn: reserved feeling, affection expressed as duty.",
            "Moon in Aquarius: detached empathy, the mind belongs to the many.",
            "Moon in Pisces: boundless imagination, a porous and dreaming heart.",
        ],
        in_bhava: [
            "Moon in the 1st: a responsive, changeable persona; the public reads the face.",
            "Moon in the 2nd: family wealth flows and ebbs; nourishing speech.",
            "Moon in the 3rd: courage from feeling; close bonds with siblings.",
            "Moon in the 4th: happiness at home; the mother's strong presence.",
            "Moon in the 5th: a fertile, romantic mind; joy in children.",
            "Moon in the 6th: health follows mood; service soothes anxiety.",
            "Moon in the 7th: partnership completes the mind; a nurturing spouse.",
            "Moon in the 8th: moods dive deep; intuition for the hidden.",
            "Moon in the 9th: devotion comes naturally; fortune through the mother's line.",
            "Moon in the 10th: a public reputation that waxes and wanes with the times.",
            "Moon in the 11th: many friendships; gains arrive in tides.",
            "Moon in the 12th: a private inner life; rest and solitude restore the mind.",
        ],
    },
    GrahaTexts {
        graha: Graha::Mangal,
        in_rashi: [
            "Mars in its own sign Aries: direct force, courage without hesitation.",
            "Mars in Taurus: slow to anger, relentless once moving.",
            "Mars in Gemini: sharp words as weapons; energy scattered across fronts.",
            "Mars debilitated in Cancer: drive turned inward; effort frustrated by mood.",
            "Mars in Leo: proud daring, a fighter for honor and display.",
            "Mars in Virgo: precise, technical effort; the surgeon's blade.",
            "Mars in Libra: combat through negotiation; passion in partnership.",
            "Mars in its own sign Scorpio: strategic intensity, power held in reserve.",
            "Mars in Sagittarius: crusading energy in service of conviction.",
            "Mars exalted in Capricorn: disciplined force, ambition that executes.",
            "Mars in Aquarius: rebellious drive, effort for the group's cause.",
            "Mars in Pisces: diffuse energy, courage surfacing in sacrifice.",
        ],
        in_bhava: [
            "Mars in the 1st: a forceful body and temper; scars worn openly.",
            "Mars in the 2nd: blunt speech; wealth won and spent in bursts.",
            "Mars in the 3rd: the classic warrior's seat; bold and enterprising.",
            "Mars in the 4th: friction at home; property disputes.",
            "Mars in the 5th: competitive intellect; passionate romances.",
            "Mars in the 6th: enemies crushed; strong immunity and appetite for work.",
            "Mars in the 7th: a fiery spouse; partnership as contest.",
            "Mars in the 8th: sudden events; surgical crises and hidden strife.",
            "Mars in the 9th: a militant faith; disputes with teachers.",
            "Mars in the 10th: a commander's career; rises through decisive action.",
            "Mars in the 11th: gains seized by effort; competitive friends.",
            "Mars in the 12th: hidden anger; expenditure of force in foreign places.",
        ],
    },
    GrahaTexts {
        graha: Graha::Buddh,
        in_rashi: [
            "Mercury in Aries: fast, decisive speech that outruns reflection.",
            "Mercury in Taurus: deliberate thought, a practical and retentive mind.",
            "Mercury in its own sign Gemini: agile wit, trade in words and connections.",
            "Mercury in Cancer: intuitive reasoning, memory colored by feeling.",
            "Mercury in Leo: confident expression, thought staged for effect.",
            "Mercury exalted in Virgo: analytical mastery, language as instrument.",
            "Mercury in Libra: diplomatic intellect, judgment that weighs both sides.",
            "Mercury in Scorpio: probing mind, speech that keeps its secrets.",
            "Mercury in Sagittarius: broad ideas over fine print.",
            "Mercury in Capricorn: structured thinking, words used sparingly and well.",
            "Mercury in Aquarius: systematic, original thought for an audience of peers.",
            "Mercury debilitated in Pisces: imaginative but imprecise; logic dissolves in dream.",
        ],
        in_bhava: [
            "Mercury in the 1st: a youthful, articulate presence; wit leads.",
            "Mercury in the 2nd: income from language, trade and accounts.",
            "Mercury in the 3rd: a writer's courage; skillful hands.",
            "Mercury in the 4th: a learned home; vehicles and documents.",
            "Mercury in the 5th: playful intelligence; aptitude for speculation.",
            "Mercury in the 6th: problem-solving in service; nervous ailments.",
            "Mercury in the 7th: a clever partner; business through alliance.",
            "Mercury in the 8th: research instinct; skill with others' assets.",
            "Mercury in the 9th: scholarship in philosophy; many short pilgrimages.",
            "Mercury in the 10th: a career of communication, commerce or analysis.",
            "Mercury in the 11th: gains multiplied through networks and trade.",
            "Mercury in the 12th: a private intellect; writing done in seclusion.",
        ],
    },
    GrahaTexts {
        graha: Graha::Guru,
        in_rashi: [
            "Jupiter in Aries: bold faith, wisdom through initiative.",
            "Jupiter in Taurus: generosity made tangible; wealth as blessing.",
            "Jupiter in Gemini: many teachings; wisdom traded in conversation.",
            "Jupiter exalted in Cancer: the guru's fullest grace; protection and plenty.",
            "Jupiter in Leo: magnanimous counsel, faith with royal bearing.",
            "Jupiter in Virgo: wisdom audited; ethics applied to detail.",
            "Jupiter in Libra: justice as creed; growth through fair dealing.",
            "Jupiter in Scorpio: faith forged in crisis; hidden wealth of insight.",
            "Jupiter in its own sign Sagittarius: natural dharma, the born teacher.",
            "Jupiter debilitated in Capricorn: optimism rationed; principle bends to ambition.",
            "Jupiter in Aquarius: universal philosophy, charity for the collective.",
            "Jupiter in its own sign Pisces: boundless compassion and quiet faith.",
        ],
        in_bhava: [
            "Jupiter in the 1st: an optimistic, protected life; dignity of bearing.",
            "Jupiter in the 2nd: abundant wealth and a truthful tongue.",
            "Jupiter in the 3rd: wise counsel to siblings; measured courage.",
            "Jupiter in the 4th: a blessed home; comfort and learning under one roof.",
            "Jupiter in the 5th: the classic blessing for children and wisdom.",
            "Jupiter in the 6th: grace in adversity; generous even to rivals.",
            "Jupiter in the 7th: a noble spouse; fortune arrives through marriage.",
            "Jupiter in the 8th: philosophical depth; eased inheritance.",
            "Jupiter in the 9th: the strongest seat of dharma; fortune and faith abound.",
            "Jupiter in the 10th: an honored career; counsel sought by the powerful.",
            "Jupiter in the 11th: great gains; elder friends as benefactors.",
            "Jupiter in the 12th: charity and final liberation; wealth spent on the unseen.",
        ],
    },
    GrahaTexts {
        graha: Graha::Shukra,
        in_rashi: [
            "Venus in Aries: impulsive affection, beauty pursued directly.",
            "Venus in its own sign Taurus: sensual ease, steadfast love of comfort.",
            "Venus in Gemini: charm in conversation; affection kept light.",
            "Venus in Cancer: tender devotion; love as nourishment.",
            "Venus in Leo: romance with grandeur; love of the stage.",
            "Venus debilitated in Virgo: love measured and critiqued; pleasure rationed.",
            "Venus in its own sign Libra: harmony's home; grace in every alliance.",
            "Venus in Scorpio: magnetic desire; love entangled with power.",
            "Venus in Sagittarius: love of freedom and distant beauty.",
            "Venus in Capricorn: loyal, pragmatic affection; beauty in restraint.",
            "Venus in Aquarius: unconventional tastes; affection for the unusual.",
            "Venus exalted in Pisces: unconditional love, art touching the divine.",
        ],
        in_bhava: [
            "Venus in the 1st: grace and charm of person; a life drawn to beauty.",
            "Venus in the 2nd: wealth through the arts; a sweet and pleasing voice.",
            "Venus in the 3rd: artistic skill; pleasant dealings with siblings.",
            "Venus in the 4th: a beautiful home and vehicles; domestic happiness.",
            "Venus in the 5th: romantic creativity; charming children.",
            "Venus in the 6th: service in adornment; indulgence as ailment.",
            "Venus in the 7th: the karaka in its house; a devoted, attractive spouse.",
            "Venus in the 8th: pleasures of the hidden; a partner's wealth.",
            "Venus in the 9th: refined faith; fortune through women and the arts.",
            "Venus in the 10th: a career in beauty, diplomacy or luxury.",
            "Venus in the 11th: gains through artistry; gracious friends.",
            "Venus in the 12th: the classic seat of bed pleasures and foreign comfort.",
        ],
    },
    GrahaTexts {
        graha: Graha::Shani,
        in_rashi: [
            "Saturn debilitated in Aries: discipline resists haste; effort misfires early.",
            "Saturn in Taurus: patient accumulation; endurance in comfort's service.",
            "Saturn in Gemini: structured thought; speech weighed before spoken.",
            "Saturn in Cancer: duty at home; affection expressed with difficulty.",
            "Saturn in Leo: authority contested; pride schooled by limits.",
            "Saturn in Virgo: exacting labor; mastery of tedious detail.",
            "Saturn exalted in Libra: justice perfected; fairness as iron law.",
            "Saturn in Scorpio: endurance through ordeal; fear transmuted to power.",
            "Saturn in Sagittarius: disciplined philosophy; faith tested by time.",
            "Saturn in its own sign Capricorn: the mountain of duty, climbed slowly.",
            "Saturn in its own sign Aquarius: the lawgiver of the collective.",
            "Saturn in Pisces: solitary duty; renunciation as discipline.",
        ],
        in_bhava: [
            "Saturn in the 1st: a serious bearing; life ripens late.",
            "Saturn in the 2nd: careful savings; sparse but lasting speech.",
            "Saturn in the 3rd: courage that endures; duty to siblings.",
            "Saturn in the 4th: an austere home; distance from the mother.",
            "Saturn in the 5th: delayed children; sober, structural intellect.",
            "Saturn in the 6th: the strongest seat for labor; enemies outlasted.",
            "Saturn in the 7th: a late or older spouse; partnership as obligation.",
            "Saturn in the 8th: the gift of long life; slow transformations.",
            "Saturn in the 9th: a skeptic's faith; fortune earned, never given.",
            "Saturn in the 10th: authority through endurance; the long career.",
            "Saturn in the 11th: gains accumulate slowly but never leave.",
            "Saturn in the 12th: solitude and distant lands; expenses disciplined.",
        ],
    },
    GrahaTexts {
        graha: Graha::Rahu,
        in_rashi: [
            "Rahu in Aries: obsessive ambition for first place.",
            "Rahu in Taurus: insatiable appetite for wealth and comfort.",
            "Rahu in Gemini: amplified cleverness; information as intoxicant.",
            "Rahu in Cancer: hunger for belonging; a borrowed sense of home.",
            "Rahu in Leo: craving for the spotlight and the crown.",
            "Rahu in Virgo: obsession with technique and perfection.",
            "Rahu in Libra: desire for alliance; partnerships of ambition.",
            "Rahu in Scorpio: fascination with the forbidden and occult.",
            "Rahu in Sagittarius: foreign creeds; conviction without lineage.",
            "Rahu in Capricorn: raw ambition for status and structure.",
            "Rahu in Aquarius: visions of the future; hunger for the new order.",
            "Rahu in Pisces: longing for dissolution; mirage of the infinite.",
        ],
        in_bhava: [
            "Rahu in the 1st: an unconventional persona; identity as experiment.",
            "Rahu in the 2nd: wealth by unorthodox means; exotic speech.",
            "Rahu in the 3rd: audacious ventures; media and messages.",
            "Rahu in the 4th: an unsettled home; foreign residence.",
            "Rahu in the 5th: unconventional creativity; speculative fever.",
            "Rahu in the 6th: enemies handled by cunning; unusual ailments.",
            "Rahu in the 7th: a foreign or unconventional partner.",
            "Rahu in the 8th: magnified mysteries; sudden windfalls and losses.",
            "Rahu in the 9th: heterodox beliefs; fortune abroad.",
            "Rahu in the 10th: meteoric career; status by any means.",
            "Rahu in the 11th: enormous gains; ambitions among the influential.",
            "Rahu in the 12th: foreign lands and hidden expenses; restless sleep.",
        ],
    },
    GrahaTexts {
        graha: Graha::Ketu,
        in_rashi: [
            "Ketu in Aries: detached force; action without claim.",
            "Ketu in Taurus: indifference to accumulation; simple needs.",
            "Ketu in Gemini: skepticism of words; intuitive knowing.",
            "Ketu in Cancer: emotional renunciation; a past-life home.",
            "Ketu in Leo: severed pride; leadership declined.",
            "Ketu in Virgo: mastery of detail held lightly.",
            "Ketu in Libra: solitude within partnership.",
            "Ketu in Scorpio: innate occult depth; fearlessness before endings.",
            "Ketu in Sagittarius: inherited wisdom; faith beyond doctrine.",
            "Ketu in Capricorn: ambition renounced; duty without reward sought.",
            "Ketu in Aquarius: apart from the crowd it serves.",
            "Ketu in Pisces: the moksha-karaka at home; quiet liberation.",
        ],
        in_bhava: [
            "Ketu in the 1st: an elusive self; the body held loosely.",
            "Ketu in the 2nd: detachment from wealth; abrupt speech.",
            "Ketu in the 3rd: effortless courage; few close siblings.",
            "Ketu in the 4th: an austere or absent home; inner refuge.",
            "Ketu in the 5th: intuitive intellect; karmic ties to children.",
            "Ketu in the 6th: enemies dissolve; subtle, hard-to-name ailments.",
            "Ketu in the 7th: distance within marriage; a spiritual partner.",
            "Ketu in the 8th: piercing insight into the hidden; fearless endings.",
            "Ketu in the 9th: born detachment; the renunciate's path.",
            "Ketu in the 10th: ambivalence toward status; career in the subtle.",
            "Ketu in the 11th: gains released as they arrive; few but deep friends.",
            "Ketu in the 12th: the strongest seat for liberation; sleep beyond dreams.",
        ],
    },
];

/// Sparse chart-specific override: texts keyed by 1-based sign or house
/// number. Absent entries fall through to the generic table.
pub(crate) struct VargaOverride {
    pub varga: Varga,
    pub graha: Graha,
    pub rashi_texts: &'static [(u8, &'static str)],
    pub bhava_texts: &'static [(u8, &'static str)],
}

pub(crate) const VARGA_OVERRIDES: &[VargaOverride] = &[
    VargaOverride {
        varga: Varga::D9,
        graha: Graha::Surya,
        rashi_texts: &[],
        bhava_texts: &[(
            7,
            "Sun in the navamsa 7th: the marriage carries the father's authority; \
             a partner of status whose pride shapes the union.",
        )],
    },
    VargaOverride {
        varga: Varga::D9,
        graha: Graha::Shukra,
        rashi_texts: &[(
            12,
            "Venus exalted in the navamsa Pisces: the inner marriage blessed; \
             devotion deepens after the wedding.",
        )],
        bhava_texts: &[
            (
                1,
                "Venus in the navamsa 1st: grace matures in the spouse's company.",
            ),
            (
                7,
                "Venus in the navamsa 7th: the marriage karaka in the marriage house \
                 of the marriage chart; a devoted and harmonious union.",
            ),
        ],
    },
    VargaOverride {
        varga: Varga::D9,
        graha: Graha::Shani,
        rashi_texts: &[],
        bhava_texts: &[(
            7,
            "Saturn in the navamsa 7th: commitment tested and then made permanent; \
             the union strengthens with age.",
        )],
    },
    VargaOverride {
        varga: Varga::D10,
        graha: Graha::Surya,
        rashi_texts: &[],
        bhava_texts: &[(
            10,
            "Sun in the dashamsa 10th: career crowned; authority in the profession itself.",
        )],
    },
    VargaOverride {
        varga: Varga::D10,
        graha: Graha::Shani,
        rashi_texts: &[],
        bhava_texts: &[(
            10,
            "Saturn in the dashamsa 10th: the profession is the discipline; \
             mastery arrives through years of unglamorous work.",
        )],
    },
    VargaOverride {
        varga: Varga::D10,
        graha: Graha::Buddh,
        rashi_texts: &[(
            6,
            "Mercury in the dashamsa Virgo: professional analysis at its sharpest.",
        )],
        bhava_texts: &[],
    },
];
