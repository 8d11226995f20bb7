//! Built-in vocabulary shipped with the responder.
//!
//! File: cli/src/responder/builtin.rs
//!
//! Surface words map to canonical keys, canonical keys map to replies, and
//! the default list is used when nothing in the input is recognized. Keys are
//! lowercase because `InputReader` lowercases everything it reads.

/// Surface word → canonical key.
pub(crate) const SYNONYMS: &[(&str, &str)] = &[
    ("morning", "hello"),
    ("hello", "hello"),
    ("hey", "hello"),
    ("afternoon", "afternoon"),
    ("creazy", "creazy"),
    ("hi", "hi"),
    ("slow", "slow"),
    ("performance", "performance"),
    ("bug", "bug"),
    ("buggy", "bug"),
    ("sad", "sad"),
    ("pained", "sad"),
    ("windows", "windows"),
    ("mac", "mac"),
    ("expensive", "expensive"),
    ("jacket", "expensive"),
    ("installation", "installation"),
    ("memory", "memory"),
    ("linux", "linux"),
    ("bluej", "bluej"),
    ("processors", "processor"),
    ("processor", "processor"),
    ("crashes", "crash"),
    ("crash", "crash"),
];

/// Canonical key → reply.
pub(crate) const RESPONSES: &[(&str, &str)] = &[
    ("hello", "Hi I am great what about yourself"),
    ("afternoon", "Hello there, how are we today?"),
    ("creazy", "Yes, it is a wee bit crack-brained."),
    (
        "sad",
        "Do not be sad. There is many things to discover! \n\
         I believe you neet to go for holiday ;)",
    ),
    ("hi", "Hi, I am so happy to talk to you. What is going on?"),
    (
        "processor",
        "Top two brands that produce processors are Intel and AMD. \
         This days we can buy 12 core processor witch clock rate up to 6MHz",
    ),
    (
        "crash",
        "Well, it never crashes on our system. It must have something\n\
         to do with your system. Tell me more about your configuration.",
    ),
    (
        "slow",
        "I think this has to do with your hardware. Upgrading your processor\n\
         should solve all performance problems. Have you got a problem with\n\
         our software?",
    ),
    (
        "performance",
        "Performance was quite adequate in all our tests. Are you running\n\
         any other processes in the background?",
    ),
    (
        "bug",
        "Well, you know, all software has some bugs. But our software engineers\n\
         are working very hard to fix them. Can you describe the problem a bit\n\
         further?",
    ),
    (
        "windows",
        "This is a known bug to do with the Windows operating system. Please\n\
         report it to Microsoft. There is nothing we can do about this.",
    ),
    (
        "mac",
        "This is a known bug to do with the Mac operating system. Please\n\
         report it to Apple. There is nothing we can do about this.",
    ),
    (
        "expensive",
        "The cost of our product is quite competitive. Have you looked around\n\
         and really compared our features?",
    ),
    (
        "installation",
        "The installation is really quite straight forward. We have tons of\n\
         wizards that do all the work for you. Have you read the installation\n\
         instructions?",
    ),
    (
        "memory",
        "If you read the system requirements carefully, you will see that the\n\
         specified memory requirements are 1.5 giga byte. You really should\n\
         upgrade your memory. Anything else you want to know?",
    ),
    (
        "linux",
        "We take Linux support very seriously. But there are some problems.\n\
         Most have to do with incompatible glibc versions. Can you be a bit\n\
         more precise?",
    ),
    (
        "bluej",
        "Ahhh, BlueJ, yes. We tried to buy out those guys long ago, but\n\
         they simply won't sell... Stubborn people they are. Nothing we can\n\
         do about it, I'm afraid.",
    ),
];

/// Fallback replies, picked at random when no input word is recognized.
pub(crate) const DEFAULT_RESPONSES: &[&str] = &[
    "That sounds odd. Could you describe that problem in more detail?",
    "No other customer has ever complained about this before. \n\
     What is your system configuration?",
    "That sounds interesting. Tell me more...",
    "I need a bit more information on that.",
    "Have you checked that you do not have a dll conflict?",
    "That is explained in the manual. Have you read the manual?",
    "Your description is a bit wishy-washy. Have you got an expert\n\
     there with you who could describe this more precisely?",
    "That's not a bug, it's a feature!",
    "Could you elaborate on that?",
    "Could you repeat?",
    "Sounds creepy any more stories? ",
    "I do not understand could you explain me it in other way?",
];
