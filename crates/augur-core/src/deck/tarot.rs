//! The 78-card Rider–Waite–Smith tarot deck.

use crate::item::{Arcana, Element, TarotCard};

/// Every tarot card, Major Arcana first (in order), then Wands, Cups, Swords
/// and Pentacles from Ace to King.
pub static TAROT_DECK: &[TarotCard] = &[
    TarotCard {
        id: "the-fool",
        name: "The Fool",
        arcana: Arcana::Major,
        element: Element::Air,
        keywords: &["beginnings", "spontaneity", "faith"],
        meaning: "A leap into the unknown with an open heart.",
        reversed_meaning: "Recklessness or hesitation holds you at the edge.",
        micro_quest: "Do one small thing today you have never done before.",
    },
    TarotCard {
        id: "the-magician",
        name: "The Magician",
        arcana: Arcana::Major,
        element: Element::Air,
        keywords: &["willpower", "skill", "manifestation"],
        meaning: "You already hold every tool you need to act.",
        reversed_meaning: "Scattered focus or manipulation undermines your power.",
        micro_quest: "Write down one goal and take the first concrete step.",
    },
    TarotCard {
        id: "the-high-priestess",
        name: "The High Priestess",
        arcana: Arcana::Major,
        element: Element::Water,
        keywords: &["intuition", "mystery", "inner voice"],
        meaning: "Quiet knowing speaks louder than outside noise.",
        reversed_meaning: "Secrets or ignored instincts cloud your judgement.",
        micro_quest: "Spend ten minutes in silence and note what surfaces.",
    },
    TarotCard {
        id: "the-empress",
        name: "The Empress",
        arcana: Arcana::Major,
        element: Element::Earth,
        keywords: &["abundance", "nurturing", "creativity"],
        meaning: "Growth flourishes where care is given freely.",
        reversed_meaning: "Creative block or smothering care drains you.",
        micro_quest: "Tend to something living, a plant, a friend, yourself.",
    },
    TarotCard {
        id: "the-emperor",
        name: "The Emperor",
        arcana: Arcana::Major,
        element: Element::Fire,
        keywords: &["structure", "authority", "stability"],
        meaning: "Order and clear boundaries create safety.",
        reversed_meaning: "Rigidity or control issues strain your relationships.",
        micro_quest: "Set one boundary and hold it kindly.",
    },
    TarotCard {
        id: "the-hierophant",
        name: "The Hierophant",
        arcana: Arcana::Major,
        element: Element::Earth,
        keywords: &["tradition", "guidance", "belief"],
        meaning: "Wisdom passed down offers a reliable path.",
        reversed_meaning: "Blind conformity or rebellion without purpose.",
        micro_quest: "Ask a mentor for advice on a question you carry.",
    },
    TarotCard {
        id: "the-lovers",
        name: "The Lovers",
        arcana: Arcana::Major,
        element: Element::Air,
        keywords: &["union", "choice", "alignment"],
        meaning: "A meaningful choice rooted in shared values.",
        reversed_meaning: "Disharmony or a choice made against your values.",
        micro_quest: "Name the value that should guide your next decision.",
    },
    TarotCard {
        id: "the-chariot",
        name: "The Chariot",
        arcana: Arcana::Major,
        element: Element::Water,
        keywords: &["determination", "victory", "direction"],
        meaning: "Focused will carries you past opposition.",
        reversed_meaning: "Lack of direction lets opposing forces pull you apart.",
        micro_quest: "Choose one priority and ignore distractions for an hour.",
    },
    TarotCard {
        id: "strength",
        name: "Strength",
        arcana: Arcana::Major,
        element: Element::Fire,
        keywords: &["courage", "compassion", "patience"],
        meaning: "Gentle persistence tames what force cannot.",
        reversed_meaning: "Self-doubt or raw impulse takes the reins.",
        micro_quest: "Meet a frustration today with patience instead of force.",
    },
    TarotCard {
        id: "the-hermit",
        name: "The Hermit",
        arcana: Arcana::Major,
        element: Element::Earth,
        keywords: &["solitude", "reflection", "wisdom"],
        meaning: "Step back to find the light within.",
        reversed_meaning: "Isolation turns into loneliness or avoidance.",
        micro_quest: "Take a walk alone without your phone.",
    },
    TarotCard {
        id: "wheel-of-fortune",
        name: "Wheel of Fortune",
        arcana: Arcana::Major,
        element: Element::Fire,
        keywords: &["cycles", "fate", "turning point"],
        meaning: "The wheel turns and a new chapter opens.",
        reversed_meaning: "Resisting change prolongs a difficult cycle.",
        micro_quest: "Notice one pattern that keeps repeating in your life.",
    },
    TarotCard {
        id: "justice",
        name: "Justice",
        arcana: Arcana::Major,
        element: Element::Air,
        keywords: &["fairness", "truth", "cause and effect"],
        meaning: "Honest action brings a balanced outcome.",
        reversed_meaning: "Avoiding accountability tips the scales.",
        micro_quest: "Settle a small debt or unfinished promise.",
    },
    TarotCard {
        id: "the-hanged-man",
        name: "The Hanged Man",
        arcana: Arcana::Major,
        element: Element::Water,
        keywords: &["surrender", "pause", "new perspective"],
        meaning: "Letting go reveals a view you could not see.",
        reversed_meaning: "Stalling or needless sacrifice keeps you stuck.",
        micro_quest: "Look at a problem from the opposite point of view.",
    },
    TarotCard {
        id: "death",
        name: "Death",
        arcana: Arcana::Major,
        element: Element::Water,
        keywords: &["endings", "transformation", "release"],
        meaning: "Something ends so something truer can begin.",
        reversed_meaning: "Clinging to what is finished delays renewal.",
        micro_quest: "Clear out one object or habit you have outgrown.",
    },
    TarotCard {
        id: "temperance",
        name: "Temperance",
        arcana: Arcana::Major,
        element: Element::Fire,
        keywords: &["balance", "moderation", "healing"],
        meaning: "Blending opposites creates harmony.",
        reversed_meaning: "Excess or imbalance upsets your rhythm.",
        micro_quest: "Balance today's busiest task with a restful one.",
    },
    TarotCard {
        id: "the-devil",
        name: "The Devil",
        arcana: Arcana::Major,
        element: Element::Earth,
        keywords: &["attachment", "shadow", "temptation"],
        meaning: "Recognise the chains you agreed to wear.",
        reversed_meaning: "Release from an unhealthy bond is within reach.",
        micro_quest: "Name one habit that controls you more than you control it.",
    },
    TarotCard {
        id: "the-tower",
        name: "The Tower",
        arcana: Arcana::Major,
        element: Element::Fire,
        keywords: &["upheaval", "revelation", "awakening"],
        meaning: "Sudden change clears false foundations.",
        reversed_meaning: "Fearing collapse keeps you in a crumbling structure.",
        micro_quest: "Admit one truth you have been avoiding.",
    },
    TarotCard {
        id: "the-star",
        name: "The Star",
        arcana: Arcana::Major,
        element: Element::Air,
        keywords: &["hope", "renewal", "inspiration"],
        meaning: "After the storm, quiet hope returns.",
        reversed_meaning: "Discouragement dims your faith in the future.",
        micro_quest: "Write down three things you look forward to.",
    },
    TarotCard {
        id: "the-moon",
        name: "The Moon",
        arcana: Arcana::Major,
        element: Element::Water,
        keywords: &["illusion", "dreams", "subconscious"],
        meaning: "Not everything is as it seems; trust your instincts.",
        reversed_meaning: "Confusion lifts as hidden fears come to light.",
        micro_quest: "Record your dreams tonight when you wake.",
    },
    TarotCard {
        id: "the-sun",
        name: "The Sun",
        arcana: Arcana::Major,
        element: Element::Fire,
        keywords: &["joy", "success", "vitality"],
        meaning: "Warmth, clarity and success shine on you.",
        reversed_meaning: "Temporary clouds hide a light that is still there.",
        micro_quest: "Share something that makes you happy with someone else.",
    },
    TarotCard {
        id: "judgement",
        name: "Judgement",
        arcana: Arcana::Major,
        element: Element::Fire,
        keywords: &["rebirth", "calling", "reckoning"],
        meaning: "A call to rise and answer your purpose.",
        reversed_meaning: "Self-criticism drowns out your inner calling.",
        micro_quest: "Forgive yourself for one past mistake.",
    },
    TarotCard {
        id: "the-world",
        name: "The World",
        arcana: Arcana::Major,
        element: Element::Earth,
        keywords: &["completion", "integration", "wholeness"],
        meaning: "A cycle completes and you stand whole.",
        reversed_meaning: "Loose ends keep a chapter from closing.",
        micro_quest: "Finish one task you started long ago.",
    },
    TarotCard {
        id: "ace-of-wands",
        name: "Ace of Wands",
        arcana: Arcana::Wands,
        element: Element::Fire,
        keywords: &["inspiration", "potential", "spark"],
        meaning: "A fresh creative spark asks to be acted on.",
        reversed_meaning: "Delays or lack of motivation smother the spark.",
        micro_quest: "Start a creative project, even for five minutes.",
    },
    TarotCard {
        id: "two-of-wands",
        name: "Two of Wands",
        arcana: Arcana::Wands,
        element: Element::Fire,
        keywords: &["planning", "decisions", "vision"],
        meaning: "You stand at the threshold of a bold plan.",
        reversed_meaning: "Fear of the unknown keeps plans on paper.",
        micro_quest: "Sketch a plan for the next three months.",
    },
    TarotCard {
        id: "three-of-wands",
        name: "Three of Wands",
        arcana: Arcana::Wands,
        element: Element::Fire,
        keywords: &["expansion", "foresight", "progress"],
        meaning: "Your efforts begin to reach further horizons.",
        reversed_meaning: "Obstacles or impatience slow expansion.",
        micro_quest: "Reach out to someone who could widen your horizons.",
    },
    TarotCard {
        id: "four-of-wands",
        name: "Four of Wands",
        arcana: Arcana::Wands,
        element: Element::Fire,
        keywords: &["celebration", "home", "harmony"],
        meaning: "A milestone worth celebrating with others.",
        reversed_meaning: "Tension at home disturbs the celebration.",
        micro_quest: "Plan a small gathering or shared meal.",
    },
    TarotCard {
        id: "five-of-wands",
        name: "Five of Wands",
        arcana: Arcana::Wands,
        element: Element::Fire,
        keywords: &["conflict", "competition", "friction"],
        meaning: "Competing voices test your position.",
        reversed_meaning: "Avoiding conflict lets tension simmer.",
        micro_quest: "Listen fully to a view you disagree with.",
    },
    TarotCard {
        id: "six-of-wands",
        name: "Six of Wands",
        arcana: Arcana::Wands,
        element: Element::Fire,
        keywords: &["recognition", "victory", "confidence"],
        meaning: "Public recognition follows your effort.",
        reversed_meaning: "Doubt or ego distorts your success.",
        micro_quest: "Congratulate someone else on their success.",
    },
    TarotCard {
        id: "seven-of-wands",
        name: "Seven of Wands",
        arcana: Arcana::Wands,
        element: Element::Fire,
        keywords: &["defence", "perseverance", "conviction"],
        meaning: "Stand your ground for what you believe.",
        reversed_meaning: "Exhaustion tempts you to give up.",
        micro_quest: "Defend a boundary you have let slide.",
    },
    TarotCard {
        id: "eight-of-wands",
        name: "Eight of Wands",
        arcana: Arcana::Wands,
        element: Element::Fire,
        keywords: &["speed", "movement", "news"],
        meaning: "Events accelerate and messages arrive.",
        reversed_meaning: "Haste or delays scramble communication.",
        micro_quest: "Reply to a message you have been postponing.",
    },
    TarotCard {
        id: "nine-of-wands",
        name: "Nine of Wands",
        arcana: Arcana::Wands,
        element: Element::Fire,
        keywords: &["resilience", "persistence", "last stand"],
        meaning: "You are close to the finish; hold on.",
        reversed_meaning: "Paranoia or fatigue makes you guarded.",
        micro_quest: "Rest deliberately before your next push.",
    },
    TarotCard {
        id: "ten-of-wands",
        name: "Ten of Wands",
        arcana: Arcana::Wands,
        element: Element::Fire,
        keywords: &["burden", "responsibility", "overload"],
        meaning: "You carry more than your share.",
        reversed_meaning: "Release some weight before it breaks you.",
        micro_quest: "Delegate or drop one obligation this week.",
    },
    TarotCard {
        id: "page-of-wands",
        name: "Page of Wands",
        arcana: Arcana::Wands,
        element: Element::Fire,
        keywords: &["enthusiasm", "exploration", "discovery"],
        meaning: "A curious new adventure calls.",
        reversed_meaning: "Hasty ideas lack follow-through.",
        micro_quest: "Learn about a topic that excites you.",
    },
    TarotCard {
        id: "knight-of-wands",
        name: "Knight of Wands",
        arcana: Arcana::Wands,
        element: Element::Fire,
        keywords: &["energy", "passion", "adventure"],
        meaning: "Charge ahead with passion and daring.",
        reversed_meaning: "Impulsiveness scatters your fire.",
        micro_quest: "Channel restless energy into exercise.",
    },
    TarotCard {
        id: "queen-of-wands",
        name: "Queen of Wands",
        arcana: Arcana::Wands,
        element: Element::Fire,
        keywords: &["confidence", "warmth", "determination"],
        meaning: "Radiate confidence and warmth.",
        reversed_meaning: "Jealousy or insecurity dims your glow.",
        micro_quest: "Compliment yourself out loud.",
    },
    TarotCard {
        id: "king-of-wands",
        name: "King of Wands",
        arcana: Arcana::Wands,
        element: Element::Fire,
        keywords: &["leadership", "vision", "boldness"],
        meaning: "Lead with vision and inspire others.",
        reversed_meaning: "Impulsive or overbearing leadership.",
        micro_quest: "Share your vision with someone who can help.",
    },
    TarotCard {
        id: "ace-of-cups",
        name: "Ace of Cups",
        arcana: Arcana::Cups,
        element: Element::Water,
        keywords: &["new love", "compassion", "emotional start"],
        meaning: "An open heart overflows with new feeling.",
        reversed_meaning: "Emotional blockage keeps the cup from filling.",
        micro_quest: "Tell someone you appreciate them.",
    },
    TarotCard {
        id: "two-of-cups",
        name: "Two of Cups",
        arcana: Arcana::Cups,
        element: Element::Water,
        keywords: &["partnership", "mutual attraction", "connection"],
        meaning: "A bond forms through shared feeling.",
        reversed_meaning: "Imbalance or mistrust between partners.",
        micro_quest: "Reconnect with someone important to you.",
    },
    TarotCard {
        id: "three-of-cups",
        name: "Three of Cups",
        arcana: Arcana::Cups,
        element: Element::Water,
        keywords: &["friendship", "community", "celebration"],
        meaning: "Joy shared among friends.",
        reversed_meaning: "Overindulgence or gossip sours the gathering.",
        micro_quest: "Celebrate a friend's good news.",
    },
    TarotCard {
        id: "four-of-cups",
        name: "Four of Cups",
        arcana: Arcana::Cups,
        element: Element::Water,
        keywords: &["apathy", "contemplation", "reevaluation"],
        meaning: "Look again at what is being offered.",
        reversed_meaning: "Renewed interest after a period of withdrawal.",
        micro_quest: "Notice an offer you have been ignoring.",
    },
    TarotCard {
        id: "five-of-cups",
        name: "Five of Cups",
        arcana: Arcana::Cups,
        element: Element::Water,
        keywords: &["loss", "grief", "regret"],
        meaning: "Mourn what spilled, but see what remains.",
        reversed_meaning: "Acceptance and moving forward.",
        micro_quest: "Write about a loss, then list what remains.",
    },
    TarotCard {
        id: "six-of-cups",
        name: "Six of Cups",
        arcana: Arcana::Cups,
        element: Element::Water,
        keywords: &["nostalgia", "innocence", "memories"],
        meaning: "Sweet memories bring comfort.",
        reversed_meaning: "Living in the past blocks the present.",
        micro_quest: "Reach out to an old friend.",
    },
    TarotCard {
        id: "seven-of-cups",
        name: "Seven of Cups",
        arcana: Arcana::Cups,
        element: Element::Water,
        keywords: &["choices", "illusion", "fantasy"],
        meaning: "Many options, not all of them real.",
        reversed_meaning: "Clarity returns as illusions fade.",
        micro_quest: "Cross one unrealistic option off your list.",
    },
    TarotCard {
        id: "eight-of-cups",
        name: "Eight of Cups",
        arcana: Arcana::Cups,
        element: Element::Water,
        keywords: &["walking away", "disillusion", "seeking"],
        meaning: "Leaving behind what no longer fulfils.",
        reversed_meaning: "Fear of change keeps you in place.",
        micro_quest: "Step away from one draining situation.",
    },
    TarotCard {
        id: "nine-of-cups",
        name: "Nine of Cups",
        arcana: Arcana::Cups,
        element: Element::Water,
        keywords: &["contentment", "satisfaction", "wishes"],
        meaning: "A wish fulfilled; savour it.",
        reversed_meaning: "Smugness or dissatisfaction despite plenty.",
        micro_quest: "Make a gratitude list of ten items.",
    },
    TarotCard {
        id: "ten-of-cups",
        name: "Ten of Cups",
        arcana: Arcana::Cups,
        element: Element::Water,
        keywords: &["harmony", "family", "fulfilment"],
        meaning: "Emotional fulfilment and lasting happiness.",
        reversed_meaning: "Disconnection within the family.",
        micro_quest: "Spend quality time with loved ones.",
    },
    TarotCard {
        id: "page-of-cups",
        name: "Page of Cups",
        arcana: Arcana::Cups,
        element: Element::Water,
        keywords: &["creativity", "intuition", "sensitivity"],
        meaning: "A gentle message from the heart.",
        reversed_meaning: "Emotional immaturity or creative block.",
        micro_quest: "Try a creative exercise without judging it.",
    },
    TarotCard {
        id: "knight-of-cups",
        name: "Knight of Cups",
        arcana: Arcana::Cups,
        element: Element::Water,
        keywords: &["romance", "charm", "imagination"],
        meaning: "Follow the heart with grace.",
        reversed_meaning: "Moodiness or unrealistic expectations.",
        micro_quest: "Do something romantic or kind, unprompted.",
    },
    TarotCard {
        id: "queen-of-cups",
        name: "Queen of Cups",
        arcana: Arcana::Cups,
        element: Element::Water,
        keywords: &["compassion", "calm", "emotional security"],
        meaning: "Nurture with empathy and calm.",
        reversed_meaning: "Co-dependence or emotional overwhelm.",
        micro_quest: "Offer a listening ear without advice.",
    },
    TarotCard {
        id: "king-of-cups",
        name: "King of Cups",
        arcana: Arcana::Cups,
        element: Element::Water,
        keywords: &["emotional balance", "diplomacy", "generosity"],
        meaning: "Master of feeling, calm under pressure.",
        reversed_meaning: "Emotional manipulation or volatility.",
        micro_quest: "Stay calm in a tense moment today.",
    },
    TarotCard {
        id: "ace-of-swords",
        name: "Ace of Swords",
        arcana: Arcana::Swords,
        element: Element::Air,
        keywords: &["clarity", "breakthrough", "truth"],
        meaning: "A flash of clarity cuts through confusion.",
        reversed_meaning: "Confusion or harsh words cloud the mind.",
        micro_quest: "State your main goal in one sentence.",
    },
    TarotCard {
        id: "two-of-swords",
        name: "Two of Swords",
        arcana: Arcana::Swords,
        element: Element::Air,
        keywords: &["indecision", "stalemate", "avoidance"],
        meaning: "A difficult choice waits behind the blindfold.",
        reversed_meaning: "Information overload breaks the stalemate.",
        micro_quest: "Make one decision you have been avoiding.",
    },
    TarotCard {
        id: "three-of-swords",
        name: "Three of Swords",
        arcana: Arcana::Swords,
        element: Element::Air,
        keywords: &["heartbreak", "sorrow", "hurt"],
        meaning: "Painful truth pierces the heart.",
        reversed_meaning: "Recovery begins as you release pain.",
        micro_quest: "Let yourself feel one difficult emotion fully.",
    },
    TarotCard {
        id: "four-of-swords",
        name: "Four of Swords",
        arcana: Arcana::Swords,
        element: Element::Air,
        keywords: &["rest", "recovery", "contemplation"],
        meaning: "Pause and let the mind recover.",
        reversed_meaning: "Restlessness or burnout demands rest.",
        micro_quest: "Schedule real rest in your calendar.",
    },
    TarotCard {
        id: "five-of-swords",
        name: "Five of Swords",
        arcana: Arcana::Swords,
        element: Element::Air,
        keywords: &["conflict", "defeat", "winning at all costs"],
        meaning: "A victory that costs too much.",
        reversed_meaning: "Reconciliation after conflict.",
        micro_quest: "Let go of the need to win one argument.",
    },
    TarotCard {
        id: "six-of-swords",
        name: "Six of Swords",
        arcana: Arcana::Swords,
        element: Element::Air,
        keywords: &["transition", "moving on", "calmer waters"],
        meaning: "Leaving turmoil for calmer waters.",
        reversed_meaning: "Unfinished business holds you back.",
        micro_quest: "Take one step toward a needed change.",
    },
    TarotCard {
        id: "seven-of-swords",
        name: "Seven of Swords",
        arcana: Arcana::Swords,
        element: Element::Air,
        keywords: &["strategy", "stealth", "deception"],
        meaning: "Act with strategy, but watch for deceit.",
        reversed_meaning: "Coming clean or being caught out.",
        micro_quest: "Review a plan for hidden weaknesses.",
    },
    TarotCard {
        id: "eight-of-swords",
        name: "Eight of Swords",
        arcana: Arcana::Swords,
        element: Element::Air,
        keywords: &["restriction", "self-imprisonment", "helplessness"],
        meaning: "The binds are looser than they look.",
        reversed_meaning: "Release from limiting beliefs.",
        micro_quest: "Challenge one limiting thought about yourself.",
    },
    TarotCard {
        id: "nine-of-swords",
        name: "Nine of Swords",
        arcana: Arcana::Swords,
        element: Element::Air,
        keywords: &["anxiety", "worry", "nightmares"],
        meaning: "Worry keeps you awake at night.",
        reversed_meaning: "Hope returns as fear loosens.",
        micro_quest: "Write your worries down before sleep.",
    },
    TarotCard {
        id: "ten-of-swords",
        name: "Ten of Swords",
        arcana: Arcana::Swords,
        element: Element::Air,
        keywords: &["endings", "rock bottom", "release"],
        meaning: "An ending that cannot get worse.",
        reversed_meaning: "Recovery and regeneration begin.",
        micro_quest: "Identify what you can rebuild from here.",
    },
    TarotCard {
        id: "page-of-swords",
        name: "Page of Swords",
        arcana: Arcana::Swords,
        element: Element::Air,
        keywords: &["curiosity", "vigilance", "new ideas"],
        meaning: "Eager to learn and speak truth.",
        reversed_meaning: "Gossip or hasty words.",
        micro_quest: "Research a question instead of guessing.",
    },
    TarotCard {
        id: "knight-of-swords",
        name: "Knight of Swords",
        arcana: Arcana::Swords,
        element: Element::Air,
        keywords: &["ambition", "action", "drive"],
        meaning: "Charge forward with sharp focus.",
        reversed_meaning: "Recklessness or scattered aggression.",
        micro_quest: "Act decisively on one stalled task.",
    },
    TarotCard {
        id: "queen-of-swords",
        name: "Queen of Swords",
        arcana: Arcana::Swords,
        element: Element::Air,
        keywords: &["independence", "clear thinking", "honesty"],
        meaning: "Clear boundaries and honest words.",
        reversed_meaning: "Coldness or bitterness.",
        micro_quest: "Give honest feedback with kindness.",
    },
    TarotCard {
        id: "king-of-swords",
        name: "King of Swords",
        arcana: Arcana::Swords,
        element: Element::Air,
        keywords: &["authority", "intellect", "truth"],
        meaning: "Rule with reason and fairness.",
        reversed_meaning: "Misused power or cold judgement.",
        micro_quest: "Make a decision based on facts alone.",
    },
    TarotCard {
        id: "ace-of-pentacles",
        name: "Ace of Pentacles",
        arcana: Arcana::Pentacles,
        element: Element::Earth,
        keywords: &["opportunity", "prosperity", "manifestation"],
        meaning: "A seed of material opportunity.",
        reversed_meaning: "A missed chance or poor planning.",
        micro_quest: "Open a savings goal, however small.",
    },
    TarotCard {
        id: "two-of-pentacles",
        name: "Two of Pentacles",
        arcana: Arcana::Pentacles,
        element: Element::Earth,
        keywords: &["balance", "adaptability", "priorities"],
        meaning: "Juggling demands with grace.",
        reversed_meaning: "Overcommitment throws you off balance.",
        micro_quest: "Drop one commitment to regain balance.",
    },
    TarotCard {
        id: "three-of-pentacles",
        name: "Three of Pentacles",
        arcana: Arcana::Pentacles,
        element: Element::Earth,
        keywords: &["teamwork", "craft", "learning"],
        meaning: "Skill grows through collaboration.",
        reversed_meaning: "Lack of teamwork or poor quality.",
        micro_quest: "Ask for feedback on your work.",
    },
    TarotCard {
        id: "four-of-pentacles",
        name: "Four of Pentacles",
        arcana: Arcana::Pentacles,
        element: Element::Earth,
        keywords: &["security", "control", "saving"],
        meaning: "Holding tight to what you have built.",
        reversed_meaning: "Greed or fear of loss.",
        micro_quest: "Give something away freely.",
    },
    TarotCard {
        id: "five-of-pentacles",
        name: "Five of Pentacles",
        arcana: Arcana::Pentacles,
        element: Element::Earth,
        keywords: &["hardship", "isolation", "insecurity"],
        meaning: "Hard times, but help is near.",
        reversed_meaning: "Recovery from financial or spiritual loss.",
        micro_quest: "Ask for help with one struggle.",
    },
    TarotCard {
        id: "six-of-pentacles",
        name: "Six of Pentacles",
        arcana: Arcana::Pentacles,
        element: Element::Earth,
        keywords: &["generosity", "charity", "sharing"],
        meaning: "Giving and receiving in balance.",
        reversed_meaning: "Strings attached or debts owed.",
        micro_quest: "Support someone in need anonymously.",
    },
    TarotCard {
        id: "seven-of-pentacles",
        name: "Seven of Pentacles",
        arcana: Arcana::Pentacles,
        element: Element::Earth,
        keywords: &["patience", "long-term view", "investment"],
        meaning: "Patience lets the harvest ripen.",
        reversed_meaning: "Impatience with slow results.",
        micro_quest: "Review a long-term goal's progress.",
    },
    TarotCard {
        id: "eight-of-pentacles",
        name: "Eight of Pentacles",
        arcana: Arcana::Pentacles,
        element: Element::Earth,
        keywords: &["diligence", "mastery", "skill"],
        meaning: "Dedicated practice builds mastery.",
        reversed_meaning: "Perfectionism or lack of focus.",
        micro_quest: "Practise a skill for thirty minutes.",
    },
    TarotCard {
        id: "nine-of-pentacles",
        name: "Nine of Pentacles",
        arcana: Arcana::Pentacles,
        element: Element::Earth,
        keywords: &["self-sufficiency", "luxury", "reward"],
        meaning: "Enjoy the fruits of your labour.",
        reversed_meaning: "Overwork or dependence.",
        micro_quest: "Treat yourself to something you earned.",
    },
    TarotCard {
        id: "ten-of-pentacles",
        name: "Ten of Pentacles",
        arcana: Arcana::Pentacles,
        element: Element::Earth,
        keywords: &["legacy", "wealth", "family"],
        meaning: "Lasting wealth and family roots.",
        reversed_meaning: "Family disputes over resources.",
        micro_quest: "Learn something about your family history.",
    },
    TarotCard {
        id: "page-of-pentacles",
        name: "Page of Pentacles",
        arcana: Arcana::Pentacles,
        element: Element::Earth,
        keywords: &["ambition", "study", "manifestation"],
        meaning: "A studious start toward a goal.",
        reversed_meaning: "Lack of progress or procrastination.",
        micro_quest: "Learn one practical new skill.",
    },
    TarotCard {
        id: "knight-of-pentacles",
        name: "Knight of Pentacles",
        arcana: Arcana::Pentacles,
        element: Element::Earth,
        keywords: &["reliability", "routine", "hard work"],
        meaning: "Steady effort wins the race.",
        reversed_meaning: "Boredom or stagnation.",
        micro_quest: "Complete a routine task with full attention.",
    },
    TarotCard {
        id: "queen-of-pentacles",
        name: "Queen of Pentacles",
        arcana: Arcana::Pentacles,
        element: Element::Earth,
        keywords: &["nurturing", "practicality", "comfort"],
        meaning: "Practical care creates a warm home.",
        reversed_meaning: "Work and home out of balance.",
        micro_quest: "Make your space more comfortable.",
    },
    TarotCard {
        id: "king-of-pentacles",
        name: "King of Pentacles",
        arcana: Arcana::Pentacles,
        element: Element::Earth,
        keywords: &["abundance", "security", "discipline"],
        meaning: "Prosperity built through discipline.",
        reversed_meaning: "Materialism or stubbornness.",
        micro_quest: "Review your finances calmly.",
    },
];
