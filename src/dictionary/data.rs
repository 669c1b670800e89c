use super::{DiseaseEntry, DiseaseSeverity};

pub(super) const DISEASES: [DiseaseEntry; 10] = [
    DiseaseEntry {
        id: "dr",
        name: "Diabetic Retinopathy",
        category: "Retinal Disease",
        severity: DiseaseSeverity::High,
        description: "A diabetes complication that affects eyes. It's caused by damage to the blood vessels of the light-sensitive tissue at the back of the eye (retina).",
        symptoms: &[
            "Spots or dark strings floating in vision (floaters)",
            "Blurred vision",
            "Fluctuating vision",
            "Dark or empty areas in vision",
            "Vision loss",
        ],
        causes: &[
            "High blood sugar levels",
            "Long-term diabetes",
            "High blood pressure",
            "High cholesterol",
            "Pregnancy",
        ],
        treatment: &[
            "Anti-VEGF injection therapy",
            "Laser photocoagulation",
            "Vitrectomy surgery",
            "Blood sugar control",
            "Regular eye examinations",
        ],
        prevention: &[
            "Maintain good blood sugar control",
            "Monitor blood pressure",
            "Regular eye exams",
            "Healthy diet and exercise",
            "Avoid smoking",
        ],
    },
    DiseaseEntry {
        id: "glaucoma",
        name: "Glaucoma",
        category: "Optic Nerve Disease",
        severity: DiseaseSeverity::Critical,
        description: "A group of eye conditions that damage the optic nerve, often caused by abnormally high pressure in your eye. It's one of the leading causes of blindness.",
        symptoms: &[
            "Patchy blind spots in peripheral or central vision",
            "Tunnel vision in advanced stages",
            "Severe headache",
            "Eye pain",
            "Nausea and vomiting",
            "Blurred vision",
            "Halos around lights",
        ],
        causes: &[
            "High intraocular pressure",
            "Poor blood flow to optic nerve",
            "High blood pressure",
            "Family history",
            "Age over 60",
        ],
        treatment: &[
            "Prescription eye drops",
            "Oral medications",
            "Laser therapy",
            "Surgery (trabeculectomy)",
            "Drainage implants",
        ],
        prevention: &[
            "Regular comprehensive eye exams",
            "Know your family history",
            "Exercise safely",
            "Take prescribed eye drops regularly",
            "Wear eye protection",
        ],
    },
    DiseaseEntry {
        id: "cataract",
        name: "Cataract",
        category: "Lens Disease",
        severity: DiseaseSeverity::Medium,
        description: "A clouding of the normally clear lens of the eye. It's like looking through a foggy or dusty car windshield.",
        symptoms: &[
            "Clouded, blurred or dim vision",
            "Increasing difficulty with vision at night",
            "Sensitivity to light and glare",
            "Seeing halos around lights",
            "Frequent changes in eyeglass prescription",
            "Fading or yellowing of colors",
            "Double vision in a single eye",
        ],
        causes: &[
            "Aging",
            "Diabetes",
            "Excessive UV light exposure",
            "Smoking",
            "Obesity",
            "High blood pressure",
            "Eye injury or inflammation",
        ],
        treatment: &[
            "Updated eyeglass prescription",
            "Magnifying lenses",
            "Brighter lighting",
            "Cataract surgery (lens replacement)",
            "Anti-glare sunglasses",
        ],
        prevention: &[
            "Protect eyes from UV light",
            "Manage health conditions",
            "Don't smoke",
            "Eat fruits and vegetables",
            "Regular eye examinations",
        ],
    },
    DiseaseEntry {
        id: "amd",
        name: "Age-Related Macular Degeneration (AMD)",
        category: "Retinal Disease",
        severity: DiseaseSeverity::High,
        description: "An eye disease that can blur central vision due to damage to the macula, a small area near the center of the retina.",
        symptoms: &[
            "Visual distortions (straight lines appear bent)",
            "Reduced central vision",
            "Difficulty recognizing faces",
            "Need for brighter light when reading",
            "Difficulty adapting to low light levels",
            "Blurriness in printed words",
            "Central blurred spot in vision",
        ],
        causes: &[
            "Age over 50",
            "Smoking",
            "Family history",
            "Race (more common in Caucasians)",
            "Obesity",
            "Cardiovascular disease",
        ],
        treatment: &[
            "Anti-VEGF therapy",
            "Photodynamic therapy",
            "Laser therapy",
            "Vitamin supplements (AREDS2)",
            "Low vision aids",
        ],
        prevention: &[
            "Don't smoke",
            "Exercise regularly",
            "Maintain healthy blood pressure",
            "Eat leafy greens and fish",
            "Wear sunglasses",
        ],
    },
    DiseaseEntry {
        id: "retinal-detachment",
        name: "Retinal Detachment",
        category: "Retinal Disease",
        severity: DiseaseSeverity::Critical,
        description: "A medical emergency where the retina pulls away from its normal position. Without prompt treatment, it can cause permanent vision loss.",
        symptoms: &[
            "Sudden appearance of floaters",
            "Flashes of light in one or both eyes",
            "Gradually reduced peripheral vision",
            "Curtain-like shadow over visual field",
            "Sudden decrease in vision",
        ],
        causes: &[
            "Aging and posterior vitreous detachment",
            "Eye injury",
            "Advanced diabetes",
            "Previous eye surgery",
            "Extreme nearsightedness",
            "Family history",
        ],
        treatment: &[
            "Laser surgery (photocoagulation)",
            "Freezing (cryopexy)",
            "Pneumatic retinopexy",
            "Scleral buckle",
            "Vitrectomy",
        ],
        prevention: &[
            "Regular eye exams",
            "Wear protective eyewear",
            "Manage diabetes",
            "Immediate attention to warning signs",
            "Control blood sugar if diabetic",
        ],
    },
    DiseaseEntry {
        id: "conjunctivitis",
        name: "Conjunctivitis (Pink Eye)",
        category: "Conjunctival Disease",
        severity: DiseaseSeverity::Low,
        description: "An inflammation or infection of the conjunctiva, the transparent membrane that lines the eyelid and covers the white part of the eyeball.",
        symptoms: &[
            "Redness in the white of the eye",
            "Increased tear production",
            "Thick yellow discharge",
            "Itchy eyes",
            "Gritty feeling in eyes",
            "Crusting of eyelids",
        ],
        causes: &[
            "Viral infection",
            "Bacterial infection",
            "Allergies",
            "Chemical splash",
            "Foreign object in eye",
            "Blocked tear duct in babies",
        ],
        treatment: &[
            "Antibiotic eye drops (bacterial)",
            "Antihistamine eye drops (allergic)",
            "Artificial tears",
            "Warm compresses",
            "Good hygiene practices",
        ],
        prevention: &[
            "Wash hands frequently",
            "Don't touch eyes",
            "Don't share personal items",
            "Change pillowcases regularly",
            "Clean contact lenses properly",
        ],
    },
    DiseaseEntry {
        id: "dry-eye",
        name: "Dry Eye Syndrome",
        category: "Tear Film Disease",
        severity: DiseaseSeverity::Low,
        description: "A common condition that occurs when tears aren't able to provide adequate lubrication for the eyes.",
        symptoms: &[
            "Stinging or burning sensation",
            "Stringy mucus in or around eyes",
            "Light sensitivity",
            "Eye redness",
            "Watery eyes",
            "Blurred vision",
            "Eye fatigue",
        ],
        causes: &[
            "Aging",
            "Certain medications",
            "Medical conditions (diabetes, thyroid)",
            "Environmental factors",
            "Extended screen time",
            "Contact lens wear",
        ],
        treatment: &[
            "Artificial tears",
            "Prescription eye drops",
            "Punctal plugs",
            "Warm compresses",
            "Lid massage",
            "Omega-3 supplements",
        ],
        prevention: &[
            "Take screen breaks",
            "Use humidifier",
            "Wear sunglasses outdoors",
            "Stay hydrated",
            "Position screens below eye level",
        ],
    },
    DiseaseEntry {
        id: "keratitis",
        name: "Keratitis",
        category: "Corneal Disease",
        severity: DiseaseSeverity::High,
        description: "An inflammation of the cornea that can be caused by infection or injury. Can lead to serious complications if not treated.",
        symptoms: &[
            "Eye redness",
            "Eye pain",
            "Excessive tears or discharge",
            "Difficulty opening eyelid",
            "Blurred vision",
            "Light sensitivity",
            "Feeling of something in the eye",
        ],
        causes: &[
            "Bacterial infection",
            "Viral infection (herpes)",
            "Fungal infection",
            "Parasitic infection",
            "Eye injury",
            "Contaminated contact lenses",
        ],
        treatment: &[
            "Antibiotic eye drops",
            "Antiviral medications",
            "Antifungal eye drops",
            "Corticosteroid eye drops",
            "Corneal transplant (severe cases)",
        ],
        prevention: &[
            "Proper contact lens care",
            "Don't sleep in contacts",
            "Wash hands before touching eyes",
            "Use only sterile solutions",
            "Remove contacts if eyes are red",
        ],
    },
    DiseaseEntry {
        id: "uveitis",
        name: "Uveitis",
        category: "Uveal Disease",
        severity: DiseaseSeverity::High,
        description: "Inflammation of the uvea, the middle layer of the eye. Can damage vital eye tissue and lead to permanent vision loss.",
        symptoms: &[
            "Eye redness",
            "Eye pain",
            "Light sensitivity",
            "Blurred vision",
            "Dark floating spots",
            "Decreased vision",
        ],
        causes: &[
            "Autoimmune disorders",
            "Inflammatory diseases",
            "Infections",
            "Eye injury",
            "Toxins entering eye",
            "Unknown causes",
        ],
        treatment: &[
            "Corticosteroid eye drops",
            "Oral corticosteroids",
            "Immunosuppressive drugs",
            "Antibiotics or antivirals",
            "Mydriatic eye drops",
            "Surgery (severe cases)",
        ],
        prevention: &[
            "Manage autoimmune conditions",
            "Treat infections promptly",
            "Regular eye examinations",
            "Wear protective eyewear",
            "Follow treatment plans",
        ],
    },
    DiseaseEntry {
        id: "pterygium",
        name: "Pterygium",
        category: "Conjunctival Disease",
        severity: DiseaseSeverity::Low,
        description: "A growth of fleshy tissue on the conjunctiva that can extend onto the cornea. Often called 'surfer's eye'.",
        symptoms: &[
            "Visible growth on eye surface",
            "Redness and inflammation",
            "Dry or gritty feeling",
            "Blurred vision (if affects cornea)",
            "Feeling of foreign body",
        ],
        causes: &[
            "Chronic UV light exposure",
            "Dry, dusty conditions",
            "Wind exposure",
            "Outdoor work or activities",
            "Living near equator",
        ],
        treatment: &[
            "Artificial tears",
            "Steroid eye drops",
            "Decongestant eye drops",
            "Surgical removal (if affecting vision)",
            "Anti-inflammatory medications",
        ],
        prevention: &[
            "Wear UV-blocking sunglasses",
            "Wear wide-brimmed hat",
            "Use artificial tears in dry conditions",
            "Avoid excessive sun exposure",
        ],
    },
];
